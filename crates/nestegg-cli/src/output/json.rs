use serde_json::Value;

/// Emit the full computation envelope (`result`, `methodology`,
/// `assumptions`, `warnings`, `metadata`) as pretty-printed JSON.
///
/// Monetary figures arrive as decimal strings and are passed through
/// untouched, so `"113669.01"` never degrades to a float.
pub fn print_json(value: &Value) {
    println!("{}", render(value));
}

fn render(value: &Value) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| format!("{{\"error\": \"could not render JSON output: {e}\"}}"))
}
