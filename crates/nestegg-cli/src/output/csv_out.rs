use serde_json::Value;
use std::io;

/// Column order for the monthly schedule.
const SCHEDULE_COLUMNS: &[&str] = &[
    "month",
    "opening_balance",
    "interest_earned",
    "deposit_amount",
    "closing_balance",
    "cumulative_interest",
    "total_deposits",
];

/// Write output as CSV to stdout.
///
/// When the result carries a monthly schedule, that schedule IS the CSV
/// (one row per month, chart-ready). Readiness plans emit one row per
/// phase. Anything else falls back to field/value pairs.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let result = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    match result {
        Value::Object(map) => {
            if let Some(Value::Array(months)) = map.get("monthly_data") {
                write_schedule_csv(&mut wtr, months);
            } else if let Some(Value::Array(phases)) = map.get("phases") {
                write_phase_csv(&mut wtr, phases);
            } else {
                let _ = wtr.write_record(["field", "value"]);
                for (key, val) in map {
                    let _ = wtr.write_record([key.as_str(), &format_csv_value(val)]);
                }
            }
        }
        Value::Array(arr) => {
            write_schedule_csv(&mut wtr, arr);
        }
        _ => {
            let _ = wtr.write_record([&format_csv_value(result)]);
        }
    }

    let _ = wtr.flush();
}

fn write_schedule_csv(wtr: &mut csv::Writer<io::StdoutLock<'_>>, months: &[Value]) {
    let _ = wtr.write_record(SCHEDULE_COLUMNS);

    for month in months {
        if let Value::Object(map) = month {
            let row: Vec<String> = SCHEDULE_COLUMNS
                .iter()
                .map(|col| map.get(*col).map(format_csv_value).unwrap_or_default())
                .collect();
            let _ = wtr.write_record(&row);
        }
    }
}

fn write_phase_csv(wtr: &mut csv::Writer<io::StdoutLock<'_>>, phases: &[Value]) {
    let _ = wtr.write_record(["phase", "title", "status", "summary"]);

    for phase in phases {
        if let Value::Object(map) = phase {
            let row: Vec<String> = ["phase", "title", "status", "summary"]
                .iter()
                .map(|col| map.get(*col).map(format_csv_value).unwrap_or_default())
                .collect();
            let _ = wtr.write_record(&row);
        }
    }
}

fn format_csv_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
