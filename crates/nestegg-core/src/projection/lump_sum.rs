use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::projection::recurring::{compute, CalculationResult};
use crate::projection::METHODOLOGY_NOMINAL_MONTHLY;
use crate::types::{
    horizon_months, rate_range_warnings, require_non_negative, require_non_negative_rate,
    with_metadata, ComputationOutput, Money, Percent, PeriodType,
};
use crate::NestEggResult;

/// Input parameters for a single lump-sum projection. Same mechanics as the
/// recurring mode with the monthly deposit fixed at zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LumpSumInput {
    pub initial_capital: Money,
    pub investment_period: i64,
    pub period_type: PeriodType,
    /// Annual rate as a percentage (8 = 8% AER).
    pub yearly_rate: Percent,
    /// Applied to interest only, at the end of the horizon (percentage).
    pub tax_rate: Percent,
}

/// Project a one-off capital amount over the horizon.
pub fn project_lump_sum(
    input: &LumpSumInput,
) -> NestEggResult<ComputationOutput<CalculationResult>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    require_non_negative("initial_capital", input.initial_capital)?;
    require_non_negative_rate("yearly_rate", input.yearly_rate)?;
    require_non_negative_rate("tax_rate", input.tax_rate)?;
    let months = horizon_months(input.investment_period, input.period_type)?;
    rate_range_warnings(input.yearly_rate, &mut warnings);

    let result = compute(
        input.initial_capital,
        Decimal::ZERO,
        months,
        input.yearly_rate,
        input.tax_rate,
    )?;

    Ok(with_metadata(
        METHODOLOGY_NOMINAL_MONTHLY,
        input,
        warnings,
        start.elapsed().as_micros() as u64,
        result,
    ))
}
