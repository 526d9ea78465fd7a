use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::projection::schedule::{
    build_schedule, closed_form_balance, monthly_rate, overflow, MonthlyBreakdown,
};
use crate::projection::METHODOLOGY_NOMINAL_MONTHLY;
use crate::types::{
    horizon_months, rate_range_warnings, require_non_negative, require_non_negative_rate,
    with_metadata, ComputationOutput, Money, Percent, PeriodType,
};
use crate::NestEggResult;

const PERCENT: Decimal = dec!(100);

/// Input parameters for a recurring-contribution projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurringInput {
    /// Capital present at time zero.
    pub initial_capital: Money,
    /// Contributed at the end of each month.
    pub monthly_deposit: Money,
    pub investment_period: i64,
    pub period_type: PeriodType,
    /// Annual rate as a percentage (8 = 8% AER).
    pub yearly_rate: Percent,
    /// Applied to interest only, at the end of the horizon (percentage).
    pub tax_rate: Percent,
}

/// Full projection output: the month-by-month schedule plus summary figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResult {
    pub monthly_data: Vec<MonthlyBreakdown>,
    /// Principal plus every periodic deposit over the horizon.
    pub total_invested: Money,
    /// Closed-form final balance minus total invested.
    pub total_interest: Money,
    pub final_balance: Money,
    pub tax_amount: Money,
    pub tax_rate: Percent,
    pub net_balance: Money,
}

/// Project an initial capital plus a constant end-of-month deposit over the
/// horizon, producing the per-month schedule and summary figures.
pub fn project_recurring(
    input: &RecurringInput,
) -> NestEggResult<ComputationOutput<CalculationResult>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    require_non_negative("initial_capital", input.initial_capital)?;
    require_non_negative("monthly_deposit", input.monthly_deposit)?;
    require_non_negative_rate("yearly_rate", input.yearly_rate)?;
    require_non_negative_rate("tax_rate", input.tax_rate)?;
    let months = horizon_months(input.investment_period, input.period_type)?;
    rate_range_warnings(input.yearly_rate, &mut warnings);

    let result = compute(
        input.initial_capital,
        input.monthly_deposit,
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

/// Shared mechanics for the recurring and lump-sum modes. Inputs are
/// pre-validated; the horizon is a positive whole-month count.
pub(crate) fn compute(
    initial_capital: Money,
    monthly_deposit: Money,
    months: u32,
    yearly_rate: Percent,
    tax_rate: Percent,
) -> NestEggResult<CalculationResult> {
    let i = monthly_rate(yearly_rate);
    let monthly_data = build_schedule(initial_capital, monthly_deposit, months, i)?;

    let final_balance = closed_form_balance(initial_capital, monthly_deposit, months, i)?;
    let total_invested = monthly_deposit
        .checked_mul(Decimal::from(months))
        .and_then(|deposits| initial_capital.checked_add(deposits))
        .ok_or_else(|| overflow("total invested"))?;
    let total_interest = final_balance - total_invested;

    // Tax applies to earned interest only; never refunds on a non-positive
    // interest figure.
    let tax_amount = if total_interest > Decimal::ZERO {
        total_interest * tax_rate / PERCENT
    } else {
        Decimal::ZERO
    };
    let net_balance = final_balance - tax_amount;

    Ok(CalculationResult {
        monthly_data,
        total_invested,
        total_interest,
        final_balance,
        tax_amount,
        tax_rate,
        net_balance,
    })
}
