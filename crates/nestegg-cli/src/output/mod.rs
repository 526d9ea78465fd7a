pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::Value;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Fields in result objects that hold monetary values; used by the table
/// and minimal views to render whole-pound figures.
pub(crate) const MONEY_FIELDS: &[&str] = &[
    "total_invested",
    "total_interest",
    "final_balance",
    "tax_amount",
    "net_balance",
    "required_monthly_deposit",
    "emergency_target",
    "savings_gap",
    "monthly_essentials",
    "current_savings",
];
