use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NestEggError {
    #[error("Invalid horizon: {months} months — projections need at least one whole month")]
    InvalidHorizon { months: i64 },

    #[error("Invalid rate: {field} is {value} — rates below 0% are outside the modelled domain")]
    InvalidRate { field: String, value: Decimal },

    #[error("Invalid amount: {field} — {reason}")]
    InvalidAmount { field: String, reason: String },

    #[error("Numeric overflow in {context}")]
    Overflow { context: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for NestEggError {
    fn from(e: serde_json::Error) -> Self {
        NestEggError::SerializationError(e.to_string())
    }
}
