use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;
use tabled::{builder::Builder, Table};

use super::MONEY_FIELDS;
use nestegg_core::format;

/// Format output as tables using the tabled crate: a summary table of the
/// result fields (money fields rendered as whole pounds), a phase table for
/// readiness plans, and the envelope's warnings and methodology.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            if let Some(result) = map.get("result") {
                print_result_table(result, map);
            } else {
                print_flat_object(value);
            }
        }
        Value::Array(arr) => {
            print_schedule_table(arr);
        }
        _ => {
            println!("{}", value);
        }
    }
}

fn print_result_table(result: &Value, envelope: &serde_json::Map<String, Value>) {
    if let Value::Object(res_map) = result {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in res_map {
            match (key.as_str(), val) {
                // The schedule is too wide for a two-column summary; point at
                // the CSV view instead.
                ("monthly_data", Value::Array(months)) => {
                    builder.push_record([
                        "monthly_data",
                        &format!("{}-month schedule (use --output csv for rows)", months.len()),
                    ]);
                }
                ("phases", Value::Array(_)) => continue,
                _ => builder.push_record([key.as_str(), &format_field(key, val)]),
            }
        }
        let table = Table::from(builder);
        println!("{}", table);

        if let Some(Value::Array(phases)) = res_map.get("phases") {
            println!();
            print_phase_table(phases);
        }
    } else {
        print_flat_object(&Value::Object(envelope.clone()));
    }

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn print_phase_table(phases: &[Value]) {
    let mut builder = Builder::default();
    builder.push_record(["Phase", "Title", "Status", "Summary"]);
    for phase in phases {
        if let Value::Object(map) = phase {
            builder.push_record([
                &format_value(map.get("phase").unwrap_or(&Value::Null)),
                &format_value(map.get("title").unwrap_or(&Value::Null)),
                &format_value(map.get("status").unwrap_or(&Value::Null)),
                &format_value(map.get("summary").unwrap_or(&Value::Null)),
            ]);
        }
    }
    let table = Table::from(builder);
    println!("{}", table);
}

fn print_schedule_table(arr: &[Value]) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<String> = first.keys().cloned().collect();
        let mut builder = Builder::default();
        builder.push_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(h).map(format_value).unwrap_or_default())
                    .collect();
                builder.push_record(row);
            }
        }
        let table = Table::from(builder);
        println!("{}", table);
    }
}

fn print_flat_object(value: &Value) {
    if let Value::Object(map) = value {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in map {
            builder.push_record([key.as_str(), &format_field(key, val)]);
        }
        let table = Table::from(builder);
        println!("{}", table);
    }
}

/// Money fields render as whole pounds; everything else prints raw.
fn format_field(key: &str, value: &Value) -> String {
    if MONEY_FIELDS.contains(&key) {
        if let Value::String(s) = value {
            if let Ok(amount) = Decimal::from_str(s) {
                return format::gbp(amount);
            }
        }
    }
    format_value(value)
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
