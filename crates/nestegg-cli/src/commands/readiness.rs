use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde_json::Value;

use nestegg_core::readiness::{
    evaluate_readiness, IncomeStability, InvestmentExperience, RiskTolerance,
    SavingsAccountType, SurveyAnswers, YesNo,
};

use crate::input;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum YesNoArg {
    Yes,
    No,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum IncomeStabilityArg {
    Stable,
    Variable,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum AccountTypeArg {
    Standard,
    HighYield,
    None,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExperienceArg {
    None,
    Beginner,
    Intermediate,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RiskToleranceArg {
    Conservative,
    Balanced,
    Aggressive,
}

/// Arguments for the readiness questionnaire evaluation
#[derive(Args)]
pub struct ReadinessArgs {
    /// Whether any debt above ~10% APR is outstanding
    #[arg(long)]
    pub has_high_interest_debt: Option<YesNoArg>,

    /// Monthly essential expenses (rent, utilities, groceries, transport)
    #[arg(long, default_value = "0")]
    pub monthly_essentials: Decimal,

    /// Cash savings currently set aside
    #[arg(long, default_value = "0")]
    pub current_savings: Decimal,

    /// How predictable monthly income is
    #[arg(long)]
    pub income_stability: Option<IncomeStabilityArg>,

    /// Where the savings are held
    #[arg(long)]
    pub savings_account_type: Option<AccountTypeArg>,

    /// Whether a stocks & shares ISA is already open (informational)
    #[arg(long)]
    pub has_isa: Option<YesNoArg>,

    /// Prior investing experience (informational)
    #[arg(long)]
    pub investment_experience: Option<ExperienceArg>,

    /// Appetite for volatility in exchange for growth
    #[arg(long)]
    pub risk_tolerance: Option<RiskToleranceArg>,

    /// Path to a JSON or YAML answers file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_readiness(args: ReadinessArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let answers: SurveyAnswers = if let Some(ref path) = args.input {
        input::file::read_input(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        data
    } else {
        SurveyAnswers {
            has_high_interest_debt: args.has_high_interest_debt.map(|v| match v {
                YesNoArg::Yes => YesNo::Yes,
                YesNoArg::No => YesNo::No,
            }),
            debt_types: vec![],
            monthly_essentials: args.monthly_essentials,
            current_savings: args.current_savings,
            income_stability: args.income_stability.map(|v| match v {
                IncomeStabilityArg::Stable => IncomeStability::Stable,
                IncomeStabilityArg::Variable => IncomeStability::Variable,
            }),
            savings_account_type: args.savings_account_type.map(|v| match v {
                AccountTypeArg::Standard => SavingsAccountType::Standard,
                AccountTypeArg::HighYield => SavingsAccountType::HighYield,
                AccountTypeArg::None => SavingsAccountType::None,
            }),
            has_isa: args.has_isa.map(|v| match v {
                YesNoArg::Yes => YesNo::Yes,
                YesNoArg::No => YesNo::No,
            }),
            investment_experience: args.investment_experience.map(|v| match v {
                ExperienceArg::None => InvestmentExperience::None,
                ExperienceArg::Beginner => InvestmentExperience::Beginner,
                ExperienceArg::Intermediate => InvestmentExperience::Intermediate,
            }),
            risk_tolerance: args.risk_tolerance.map(|v| match v {
                RiskToleranceArg::Conservative => RiskTolerance::Conservative,
                RiskToleranceArg::Balanced => RiskTolerance::Balanced,
                RiskToleranceArg::Aggressive => RiskTolerance::Aggressive,
            }),
        }
    };

    let output = evaluate_readiness(&answers)?;
    Ok(serde_json::to_value(output)?)
}
