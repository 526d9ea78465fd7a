use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::readiness::guidance;
use crate::types::{
    require_non_negative, with_metadata, ComputationOutput, Money,
};
use crate::NestEggResult;

const METHODOLOGY: &str =
    "Ordered gating over debt, emergency fund, cash storage, and investing; \
     emergency target is monthly essentials x 3 (stable income) or x 6 (variable)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YesNo {
    Yes,
    No,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncomeStability {
    Stable,
    Variable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SavingsAccountType {
    Standard,
    HighYield,
    None,
}

/// Informational only; carried through for display but not used in the
/// phase gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvestmentExperience {
    None,
    Beginner,
    Intermediate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTolerance {
    Conservative,
    Balanced,
    Aggressive,
}

/// Answers collected across the questionnaire. `None` is the unanswered
/// state; unanswered gates do not advance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SurveyAnswers {
    pub has_high_interest_debt: Option<YesNo>,
    /// Informational: which kinds of debt were ticked.
    pub debt_types: Vec<String>,
    pub monthly_essentials: Money,
    pub current_savings: Money,
    pub income_stability: Option<IncomeStability>,
    pub savings_account_type: Option<SavingsAccountType>,
    /// Informational: whether a stocks & shares ISA is already open. Does
    /// not gate any phase.
    pub has_isa: Option<YesNo>,
    pub investment_experience: Option<InvestmentExperience>,
    pub risk_tolerance: Option<RiskTolerance>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseStatus {
    Complete,
    Current,
    Locked,
}

/// One of the four ordered plan milestones, tagged relative to the phase
/// the user currently occupies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseDescriptor {
    pub phase: u8,
    pub title: String,
    pub status: PhaseStatus,
    pub summary: String,
    pub actions: Vec<String>,
}

/// Full evaluation output: the occupied phase, all four descriptors, the
/// emergency-fund figures, and the survey figures downstream allocation
/// recommendations need.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseResult {
    pub current_phase: u8,
    pub phases: Vec<PhaseDescriptor>,
    pub emergency_target: Money,
    pub emergency_months: u32,
    pub savings_gap: Money,
    pub monthly_essentials: Money,
    pub current_savings: Money,
    pub income_stability: Option<IncomeStability>,
    pub risk_tolerance: Option<RiskTolerance>,
}

/// Evaluate the survey into a staged plan.
///
/// Gates are checked strictly top-down: debt cleared, emergency fund at
/// target, savings held in a high-yield account, then investing. The first
/// failing gate is where the user currently stands.
pub fn evaluate_readiness(
    answers: &SurveyAnswers,
) -> NestEggResult<ComputationOutput<PhaseResult>> {
    let start = Instant::now();
    let warnings: Vec<String> = Vec::new();

    require_non_negative("monthly_essentials", answers.monthly_essentials)?;
    require_non_negative("current_savings", answers.current_savings)?;

    let emergency_months: u32 = match answers.income_stability {
        Some(IncomeStability::Variable) => 6,
        _ => 3,
    };
    let emergency_target = answers.monthly_essentials * Decimal::from(emergency_months);
    let savings_gap = (emergency_target - answers.current_savings).max(Decimal::ZERO);

    let current_phase: u8 = if answers.has_high_interest_debt != Some(YesNo::No) {
        1
    } else if answers.current_savings < emergency_target {
        2
    } else if answers.savings_account_type != Some(SavingsAccountType::HighYield) {
        3
    } else {
        4
    };

    let phases = guidance::build_phases(
        current_phase,
        answers,
        emergency_target,
        emergency_months,
        savings_gap,
    );

    let result = PhaseResult {
        current_phase,
        phases,
        emergency_target,
        emergency_months,
        savings_gap,
        monthly_essentials: answers.monthly_essentials,
        current_savings: answers.current_savings,
        income_stability: answers.income_stability,
        risk_tolerance: answers.risk_tolerance,
    };

    Ok(with_metadata(
        METHODOLOGY,
        answers,
        warnings,
        start.elapsed().as_micros() as u64,
        result,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    /// Survey of someone who has cleared every gate.
    fn ready_investor() -> SurveyAnswers {
        SurveyAnswers {
            has_high_interest_debt: Some(YesNo::No),
            debt_types: vec![],
            monthly_essentials: dec!(1500),
            current_savings: dec!(10_000),
            income_stability: Some(IncomeStability::Stable),
            savings_account_type: Some(SavingsAccountType::HighYield),
            has_isa: Some(YesNo::No),
            investment_experience: Some(InvestmentExperience::Beginner),
            risk_tolerance: Some(RiskTolerance::Balanced),
        }
    }

    #[test]
    fn test_debt_pins_to_phase_one_regardless_of_everything_else() {
        let mut answers = ready_investor();
        answers.has_high_interest_debt = Some(YesNo::Yes);
        let result = evaluate_readiness(&answers).unwrap().result;
        assert_eq!(result.current_phase, 1);
    }

    #[test]
    fn test_unanswered_debt_question_does_not_advance() {
        let mut answers = ready_investor();
        answers.has_high_interest_debt = None;
        let result = evaluate_readiness(&answers).unwrap().result;
        assert_eq!(result.current_phase, 1);
    }

    #[test]
    fn test_underfunded_emergency_fund_stops_at_phase_two() {
        let mut answers = ready_investor();
        answers.current_savings = dec!(2000);
        let result = evaluate_readiness(&answers).unwrap().result;
        assert_eq!(result.current_phase, 2);
        assert_eq!(result.emergency_target, dec!(4500));
        assert_eq!(result.savings_gap, dec!(2500));
    }

    #[test]
    fn test_funded_fund_in_standard_account_stops_at_phase_three() {
        let mut answers = ready_investor();
        answers.savings_account_type = Some(SavingsAccountType::Standard);
        let result = evaluate_readiness(&answers).unwrap().result;
        assert_eq!(result.current_phase, 3);
    }

    #[test]
    fn test_all_gates_clear_reaches_phase_four() {
        let result = evaluate_readiness(&ready_investor()).unwrap().result;
        assert_eq!(result.current_phase, 4);
    }

    #[test]
    fn test_stable_income_exactly_funded_advances_past_phase_two() {
        // 1500 essentials, stable income => 4500 target; 4500 saved meets it
        let mut answers = ready_investor();
        answers.current_savings = dec!(4500);
        answers.savings_account_type = Some(SavingsAccountType::Standard);
        let result = evaluate_readiness(&answers).unwrap().result;
        assert_eq!(result.emergency_target, dec!(4500));
        assert_eq!(result.savings_gap, Decimal::ZERO);
        assert!(result.current_phase >= 3);
    }

    #[test]
    fn test_variable_income_doubles_emergency_months() {
        let mut answers = ready_investor();
        answers.income_stability = Some(IncomeStability::Variable);
        answers.current_savings = dec!(5000);
        let result = evaluate_readiness(&answers).unwrap().result;
        assert_eq!(result.emergency_months, 6);
        assert_eq!(result.emergency_target, dec!(9000));
        assert_eq!(result.current_phase, 2);
        assert_eq!(result.savings_gap, dec!(4000));
    }

    #[test]
    fn test_status_tags_are_consistent_for_every_phase() {
        for savings in [dec!(0), dec!(4500), dec!(10_000)] {
            for debt in [Some(YesNo::Yes), Some(YesNo::No)] {
                let mut answers = ready_investor();
                answers.current_savings = savings;
                answers.has_high_interest_debt = debt;
                let result = evaluate_readiness(&answers).unwrap().result;

                assert_eq!(result.phases.len(), 4);
                let complete = result
                    .phases
                    .iter()
                    .filter(|p| p.status == PhaseStatus::Complete)
                    .count();
                let current = result
                    .phases
                    .iter()
                    .filter(|p| p.status == PhaseStatus::Current)
                    .count();
                assert_eq!(complete, result.current_phase as usize - 1);
                assert_eq!(current, 1);
                assert_eq!(
                    result.phases[result.current_phase as usize - 1].status,
                    PhaseStatus::Current
                );
            }
        }
    }

    #[test]
    fn test_isa_answer_never_moves_the_phase() {
        for isa in [None, Some(YesNo::Yes), Some(YesNo::No)] {
            let mut answers = ready_investor();
            answers.has_isa = isa;
            let result = evaluate_readiness(&answers).unwrap().result;
            assert_eq!(result.current_phase, 4);

            answers.current_savings = dec!(2000);
            let result = evaluate_readiness(&answers).unwrap().result;
            assert_eq!(result.current_phase, 2);
        }
    }

    #[test]
    fn test_savings_gap_never_negative() {
        let mut answers = ready_investor();
        answers.current_savings = dec!(1_000_000);
        let result = evaluate_readiness(&answers).unwrap().result;
        assert_eq!(result.savings_gap, Decimal::ZERO);
    }

    #[test]
    fn test_echoed_figures_round_trip() {
        let answers = ready_investor();
        let result = evaluate_readiness(&answers).unwrap().result;
        assert_eq!(result.monthly_essentials, dec!(1500));
        assert_eq!(result.current_savings, dec!(10_000));
        assert_eq!(result.income_stability, Some(IncomeStability::Stable));
        assert_eq!(result.risk_tolerance, Some(RiskTolerance::Balanced));
    }

    #[test]
    fn test_rejects_negative_figures() {
        let mut answers = ready_investor();
        answers.monthly_essentials = dec!(-1);
        assert!(matches!(
            evaluate_readiness(&answers),
            Err(crate::NestEggError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn test_survey_deserializes_with_defaults() {
        let answers: SurveyAnswers = serde_json::from_str(
            r#"{"has_high_interest_debt":"no","monthly_essentials":"1200","savings_account_type":"high-yield"}"#,
        )
        .unwrap();
        assert_eq!(answers.has_high_interest_debt, Some(YesNo::No));
        assert_eq!(answers.savings_account_type, Some(SavingsAccountType::HighYield));
        assert_eq!(answers.current_savings, Decimal::ZERO);
        assert_eq!(answers.risk_tolerance, None);
    }
}
