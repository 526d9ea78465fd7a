use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde_json::Value;

use nestegg_core::projection::{
    solve_goal_based, project_lump_sum, project_recurring, GoalInput, LumpSumInput,
    RecurringInput,
};
use nestegg_core::types::PeriodType;

use crate::input;

/// Unit for the --period flag.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PeriodUnit {
    Months,
    Years,
}

impl From<PeriodUnit> for PeriodType {
    fn from(unit: PeriodUnit) -> Self {
        match unit {
            PeriodUnit::Months => PeriodType::Months,
            PeriodUnit::Years => PeriodType::Years,
        }
    }
}

/// Arguments for a recurring-contribution projection
#[derive(Args)]
pub struct RecurringArgs {
    /// Capital present at time zero
    #[arg(long)]
    pub initial_capital: Option<Decimal>,

    /// Amount contributed at the end of each month
    #[arg(long)]
    pub monthly_deposit: Option<Decimal>,

    /// Length of the investment period (whole months or years)
    #[arg(long)]
    pub period: Option<i64>,

    /// Unit for --period
    #[arg(long, default_value = "years")]
    pub period_type: PeriodUnit,

    /// Annual rate as a percentage (e.g. 8 for 8% AER)
    #[arg(long)]
    pub yearly_rate: Option<Decimal>,

    /// Tax on interest as a percentage, applied at the end of the horizon
    #[arg(long, default_value = "0")]
    pub tax_rate: Decimal,

    /// Path to a JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for a lump-sum projection
#[derive(Args)]
pub struct LumpSumArgs {
    /// One-off capital amount invested at time zero
    #[arg(long)]
    pub initial_capital: Option<Decimal>,

    /// Length of the investment period (whole months or years)
    #[arg(long)]
    pub period: Option<i64>,

    /// Unit for --period
    #[arg(long, default_value = "years")]
    pub period_type: PeriodUnit,

    /// Annual rate as a percentage (e.g. 8 for 8% AER)
    #[arg(long)]
    pub yearly_rate: Option<Decimal>,

    /// Tax on interest as a percentage, applied at the end of the horizon
    #[arg(long, default_value = "0")]
    pub tax_rate: Decimal,

    /// Path to a JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for goal seeking
#[derive(Args)]
pub struct GoalArgs {
    /// Capital present at time zero
    #[arg(long, default_value = "0")]
    pub initial_capital: Decimal,

    /// Amount the plan must reach by the end of the horizon
    #[arg(long)]
    pub target_amount: Option<Decimal>,

    /// Length of the investment period (whole months or years)
    #[arg(long)]
    pub period: Option<i64>,

    /// Unit for --period
    #[arg(long, default_value = "years")]
    pub period_type: PeriodUnit,

    /// Annual rate as a percentage (e.g. 8 for 8% AER)
    #[arg(long)]
    pub yearly_rate: Option<Decimal>,

    /// Path to a JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_recurring(args: RecurringArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let input: RecurringInput = if let Some(ref path) = args.input {
        input::file::read_input(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        data
    } else {
        RecurringInput {
            initial_capital: args
                .initial_capital
                .ok_or("--initial-capital is required (or provide --input)")?,
            monthly_deposit: args
                .monthly_deposit
                .ok_or("--monthly-deposit is required (or provide --input)")?,
            investment_period: args.period.ok_or("--period is required (or provide --input)")?,
            period_type: args.period_type.into(),
            yearly_rate: args
                .yearly_rate
                .ok_or("--yearly-rate is required (or provide --input)")?,
            tax_rate: args.tax_rate,
        }
    };

    let output = project_recurring(&input)?;
    Ok(serde_json::to_value(output)?)
}

pub fn run_lump_sum(args: LumpSumArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let input: LumpSumInput = if let Some(ref path) = args.input {
        input::file::read_input(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        data
    } else {
        LumpSumInput {
            initial_capital: args
                .initial_capital
                .ok_or("--initial-capital is required (or provide --input)")?,
            investment_period: args.period.ok_or("--period is required (or provide --input)")?,
            period_type: args.period_type.into(),
            yearly_rate: args
                .yearly_rate
                .ok_or("--yearly-rate is required (or provide --input)")?,
            tax_rate: args.tax_rate,
        }
    };

    let output = project_lump_sum(&input)?;
    Ok(serde_json::to_value(output)?)
}

pub fn run_goal(args: GoalArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let input: GoalInput = if let Some(ref path) = args.input {
        input::file::read_input(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        data
    } else {
        GoalInput {
            initial_capital: args.initial_capital,
            target_amount: args
                .target_amount
                .ok_or("--target-amount is required (or provide --input)")?,
            investment_period: args.period.ok_or("--period is required (or provide --input)")?,
            period_type: args.period_type.into(),
            yearly_rate: args
                .yearly_rate
                .ok_or("--yearly-rate is required (or provide --input)")?,
        }
    };

    let output = solve_goal_based(&input)?;
    Ok(serde_json::to_value(output)?)
}
