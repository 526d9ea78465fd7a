use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::NestEggError;
use crate::types::{Money, Percent};
use crate::NestEggResult;

const MONTHS_PER_YEAR: Decimal = dec!(12);
const PERCENT: Decimal = dec!(100);

/// One elapsed month of a projection. Months are 1-indexed; the opening
/// balance of month 1 is the initial capital.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyBreakdown {
    pub month: u32,
    pub opening_balance: Money,
    pub interest_earned: Money,
    pub deposit_amount: Money,
    pub closing_balance: Money,
    /// Running sum of interest since month 1.
    pub cumulative_interest: Money,
    /// Running sum of principal plus all deposits contributed so far.
    pub total_deposits: Money,
}

pub(crate) fn overflow(context: &str) -> NestEggError {
    NestEggError::Overflow {
        context: context.into(),
    }
}

/// Per-month rate under the nominal/12 convention: an 8 (percent) input
/// becomes 0.08/12 per month.
pub fn monthly_rate(yearly_rate: Percent) -> Decimal {
    yearly_rate / PERCENT / MONTHS_PER_YEAR
}

/// Compute (1 + rate)^periods via iterative multiplication (avoids
/// Decimal::powd drift, and matches the schedule's month-by-month
/// compounding exactly). Long horizons at high rates can compound past
/// Decimal's range; that surfaces as an overflow error, never a panic.
pub fn compound_factor(rate: Decimal, periods: u32) -> NestEggResult<Decimal> {
    let mut result = Decimal::ONE;
    let factor = Decimal::ONE + rate;
    for _ in 0..periods {
        result = result
            .checked_mul(factor)
            .ok_or_else(|| overflow("compound factor"))?;
    }
    Ok(result)
}

/// Closed-form future value of an initial capital plus end-of-month
/// deposits: `P*(1+i)^N + D*((1+i)^N - 1)/i`, degenerating to
/// `P + D*N` at zero rate.
pub fn closed_form_balance(
    initial_capital: Money,
    monthly_deposit: Money,
    months: u32,
    monthly_rate: Decimal,
) -> NestEggResult<Money> {
    if monthly_rate > Decimal::ZERO {
        let factor = compound_factor(monthly_rate, months)?;
        let capital_growth = initial_capital
            .checked_mul(factor)
            .ok_or_else(|| overflow("capital growth"))?;
        let annuity = monthly_deposit
            .checked_mul((factor - Decimal::ONE) / monthly_rate)
            .ok_or_else(|| overflow("deposit growth"))?;
        capital_growth
            .checked_add(annuity)
            .ok_or_else(|| overflow("future value"))
    } else {
        monthly_deposit
            .checked_mul(Decimal::from(months))
            .and_then(|deposits| initial_capital.checked_add(deposits))
            .ok_or_else(|| overflow("future value"))
    }
}

/// Build the full month-by-month schedule. Interest accrues on the opening
/// balance; the deposit lands at the end of the month.
pub fn build_schedule(
    initial_capital: Money,
    monthly_deposit: Money,
    months: u32,
    monthly_rate: Decimal,
) -> NestEggResult<Vec<MonthlyBreakdown>> {
    let mut schedule = Vec::with_capacity(months as usize);
    let mut balance = initial_capital;
    let mut cumulative_interest = Decimal::ZERO;
    let mut total_deposits = initial_capital;

    for month in 1..=months {
        let opening_balance = balance;
        let interest_earned = opening_balance
            .checked_mul(monthly_rate)
            .ok_or_else(|| overflow("interest accrual"))?;
        let closing_balance = opening_balance
            .checked_add(interest_earned)
            .and_then(|b| b.checked_add(monthly_deposit))
            .ok_or_else(|| overflow("balance accrual"))?;

        // Running sums are bounded by the checked closing balance.
        cumulative_interest += interest_earned;
        total_deposits += monthly_deposit;

        schedule.push(MonthlyBreakdown {
            month,
            opening_balance,
            interest_earned,
            deposit_amount: monthly_deposit,
            closing_balance,
            cumulative_interest,
            total_deposits,
        });

        balance = closing_balance;
    }

    Ok(schedule)
}
