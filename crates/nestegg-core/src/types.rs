use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::NestEggError;
use crate::NestEggResult;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as percentages (8 = 8%), matching the product's slider
/// inputs. Converted to per-month fractions internally.
pub type Percent = Decimal;

/// Whether an investment period is given in months or years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodType {
    Months,
    Years,
}

/// Convert a period + unit into a whole-month horizon.
///
/// Fractional months are not modelled; the period is an integer count and
/// years simply multiply by 12.
pub fn horizon_months(investment_period: i64, period_type: PeriodType) -> NestEggResult<u32> {
    if investment_period <= 0 {
        return Err(NestEggError::InvalidHorizon {
            months: investment_period,
        });
    }
    let months = match period_type {
        PeriodType::Years => investment_period.checked_mul(12),
        PeriodType::Months => Some(investment_period),
    }
    .ok_or(NestEggError::InvalidHorizon {
        months: investment_period,
    })?;
    u32::try_from(months).map_err(|_| NestEggError::InvalidHorizon { months })
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}

/// Reject negative monetary inputs.
pub(crate) fn require_non_negative(field: &str, value: Money) -> NestEggResult<()> {
    if value < Decimal::ZERO {
        return Err(NestEggError::InvalidAmount {
            field: field.into(),
            reason: format!("must be non-negative (got {value})"),
        });
    }
    Ok(())
}

/// Reject negative percentage rates.
pub(crate) fn require_non_negative_rate(field: &str, value: Percent) -> NestEggResult<()> {
    if value < Decimal::ZERO {
        return Err(NestEggError::InvalidRate {
            field: field.into(),
            value,
        });
    }
    Ok(())
}

/// Warn (not error) on rates outside the calibrated slider range.
pub(crate) fn rate_range_warnings(yearly_rate: Percent, warnings: &mut Vec<String>) {
    if yearly_rate > dec!(30) {
        warnings.push(format!(
            "yearly_rate of {yearly_rate}% is above the 30% range the product calibrates for"
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizon_years_to_months() {
        assert_eq!(horizon_months(10, PeriodType::Years).unwrap(), 120);
        assert_eq!(horizon_months(7, PeriodType::Months).unwrap(), 7);
    }

    #[test]
    fn test_horizon_rejects_non_positive() {
        assert!(matches!(
            horizon_months(0, PeriodType::Years),
            Err(NestEggError::InvalidHorizon { .. })
        ));
        assert!(matches!(
            horizon_months(-3, PeriodType::Months),
            Err(NestEggError::InvalidHorizon { months: -3 })
        ));
    }

    #[test]
    fn test_horizon_rejects_out_of_range_periods() {
        // A period past u32::MAX must not wrap into a small plausible horizon
        assert!(matches!(
            horizon_months(4_294_967_301, PeriodType::Months),
            Err(NestEggError::InvalidHorizon { .. })
        ));
        // Years-to-months conversion must not overflow i64
        assert!(matches!(
            horizon_months(i64::MAX, PeriodType::Years),
            Err(NestEggError::InvalidHorizon { .. })
        ));
    }

    #[test]
    fn test_period_type_serde_is_lowercase() {
        assert_eq!(
            serde_json::to_string(&PeriodType::Years).unwrap(),
            "\"years\""
        );
        let parsed: PeriodType = serde_json::from_str("\"months\"").unwrap();
        assert_eq!(parsed, PeriodType::Months);
    }
}
