use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

use super::MONEY_FIELDS;
use nestegg_core::format;

/// Print just the headline figure from the output.
///
/// Priority order covers the three projection modes and the readiness
/// plan; falls back to the first field in the result object.
pub fn print_minimal(value: &Value) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    let priority_keys = [
        "required_monthly_deposit",
        "current_phase",
        "net_balance",
        "final_balance",
    ];

    if let Value::Object(map) = result_obj {
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", format_minimal(key, val));
                    return;
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(key, val));
            return;
        }
    }

    println!("{}", format_minimal("", result_obj));
}

fn format_minimal(key: &str, value: &Value) -> String {
    if MONEY_FIELDS.contains(&key) {
        if let Value::String(s) = value {
            if let Ok(amount) = Decimal::from_str(s) {
                return format::gbp(amount);
            }
        }
    }
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
