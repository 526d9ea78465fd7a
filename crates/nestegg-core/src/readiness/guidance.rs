//! Phase guidance templates.
//!
//! Summaries and action lists are plain strings assembled per evaluation.
//! Phase 2 branches on whether the emergency fund is already fully funded;
//! phase 4 branches three ways on risk tolerance.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::format;
use crate::readiness::evaluator::{
    PhaseDescriptor, PhaseStatus, RiskTolerance, SurveyAnswers,
};
use crate::types::Money;

pub(crate) fn build_phases(
    current: u8,
    answers: &SurveyAnswers,
    emergency_target: Money,
    emergency_months: u32,
    savings_gap: Money,
) -> Vec<PhaseDescriptor> {
    let mut phases = vec![
        phase_one(current),
        phase_two(current, answers, emergency_target, emergency_months, savings_gap),
        phase_three(current),
        phase_four(current, answers),
    ];

    for p in &mut phases {
        p.status = if p.phase < current {
            PhaseStatus::Complete
        } else if p.phase == current {
            PhaseStatus::Current
        } else {
            PhaseStatus::Locked
        };
    }

    phases
}

fn phase_one(current: u8) -> PhaseDescriptor {
    let (summary, actions) = if current == 1 {
        (
            "You have high-interest debt that should be cleared before investing. \
             Debt at 20%+ APR outpaces average market returns."
                .to_string(),
            vec![
                "List all debts with interest rates above 10%".to_string(),
                "Use the avalanche method: pay minimums on all, then throw extra at the \
                 highest-rate debt"
                    .to_string(),
                "Mortgages and government student loans are exceptions - keep making \
                 standard payments"
                    .to_string(),
                "Once cleared, redirect those payments into savings".to_string(),
            ],
        )
    } else {
        (
            "No high-interest debt - you are clear to move forward.".to_string(),
            vec!["Completed".to_string()],
        )
    };

    PhaseDescriptor {
        phase: 1,
        title: "Clear High-Interest Debt".to_string(),
        status: PhaseStatus::Current,
        summary,
        actions,
    }
}

fn phase_two(
    current: u8,
    answers: &SurveyAnswers,
    emergency_target: Money,
    emergency_months: u32,
    savings_gap: Money,
) -> PhaseDescriptor {
    let funded = savings_gap <= Decimal::ZERO;

    let summary = if current == 2 {
        if funded {
            format!(
                "Your emergency fund ({}) is fully funded. Stop contributing to \
                 emergency savings and invest the rest.",
                format::gbp(emergency_target)
            )
        } else {
            format!(
                "You need {emergency_months} months of essential expenses ({}) saved. \
                 You are {} short.",
                format::gbp(emergency_target),
                format::gbp(savings_gap)
            )
        }
    } else if current > 2 {
        format!(
            "Emergency fund of {} is fully funded.",
            format::gbp(emergency_target)
        )
    } else {
        "Complete Phase 1 first.".to_string()
    };

    let actions = if current == 2 {
        if funded {
            vec![
                format!(
                    "You have {} saved - enough to cover {emergency_months} months of expenses.",
                    format::gbp(answers.current_savings)
                ),
                "Set this amount aside in an easy-access account (Phase 3).".to_string(),
                "Going forward, contribute £0 per month to emergency savings.".to_string(),
                "Redirect all new surplus income to investing (Phase 4).".to_string(),
            ]
        } else {
            vec![
                format!(
                    "Target: {} ({emergency_months} months x {}/mo)",
                    format::gbp(emergency_target),
                    format::gbp(answers.monthly_essentials)
                ),
                format!(
                    "You still need {} - start with a {} mini-goal if the full amount \
                     feels far off",
                    format::gbp(savings_gap),
                    format::gbp(dec!(1000))
                ),
                "Set up an automatic monthly transfer on payday.".to_string(),
                "Only count essential expenses: rent, utilities, groceries, transport."
                    .to_string(),
            ]
        }
    } else if current > 2 {
        vec!["Completed".to_string()]
    } else {
        vec!["Complete Phase 1 first".to_string()]
    };

    PhaseDescriptor {
        phase: 2,
        title: "Fund Your Emergency Savings".to_string(),
        status: PhaseStatus::Current,
        summary,
        actions,
    }
}

fn phase_three(current: u8) -> PhaseDescriptor {
    let summary = if current == 3 {
        "Your savings are not in a high-yield account. You are losing money to inflation."
            .to_string()
    } else if current > 3 {
        "Cash is optimized in a high-yield account.".to_string()
    } else {
        "Complete earlier phases first.".to_string()
    };

    let actions = if current == 3 {
        vec![
            "Move emergency fund to a high-yield savings account (3.5-4.0% easy-access)"
                .to_string(),
            "Consider regular savers for monthly contributions (up to 7.0-7.5% on small \
             amounts)"
                .to_string(),
            "Some platforms like Trading 212 pay 4.5% on uninvested cash".to_string(),
            "Keep the account easy-access - never lock up your emergency fund".to_string(),
        ]
    } else if current > 3 {
        vec!["Completed".to_string()]
    } else {
        vec!["Complete earlier phases first".to_string()]
    };

    PhaseDescriptor {
        phase: 3,
        title: "Optimize Your Cash Storage".to_string(),
        status: PhaseStatus::Current,
        summary,
        actions,
    }
}

fn phase_four(current: u8, answers: &SurveyAnswers) -> PhaseDescriptor {
    let risk_label = match answers.risk_tolerance {
        Some(RiskTolerance::Conservative) => "conservative",
        Some(RiskTolerance::Aggressive) => "aggressive",
        _ => "balanced",
    };

    let summary = if current == 4 {
        format!(
            "You are ready to invest. Your risk profile is {risk_label} — recommendations \
             are tailored accordingly."
        )
    } else {
        "Complete earlier phases first.".to_string()
    };

    let actions = if current == 4 {
        investing_actions(answers.risk_tolerance)
    } else {
        vec!["Complete earlier phases first".to_string()]
    };

    PhaseDescriptor {
        phase: 4,
        title: "Begin Investing via Low-Fee Platforms".to_string(),
        status: PhaseStatus::Current,
        summary,
        actions,
    }
}

/// Phase-4 action list: fund, platform, and fee guidance per risk profile.
/// Unanswered risk tolerance gets the balanced defaults.
fn investing_actions(risk: Option<RiskTolerance>) -> Vec<String> {
    let mut actions = vec![
        "Open a Stocks & Shares ISA (£20,000/year tax-free allowance)".to_string(),
    ];

    match risk {
        Some(RiskTolerance::Conservative) => actions.extend([
            "Focus on bond-heavy funds or multi-asset funds with 60–80% bonds (e.g. \
             Vanguard LifeStrategy 20% Equity)"
                .to_string(),
            "Consider a global bond index fund alongside a small equity allocation for \
             growth"
                .to_string(),
            "Choose a zero/low-fee platform: Trading 212, InvestEngine, or Freetrade for \
             smaller balances"
                .to_string(),
            "Keep total fees under 0.5% — lower turnover funds have lower costs".to_string(),
            "Set up a regular monthly investment and avoid checking daily — volatility \
             will be low"
                .to_string(),
        ]),
        Some(RiskTolerance::Aggressive) => actions.extend([
            "Invest primarily in 100% equity global index funds (e.g. FTSE Global All \
             Cap, S&P 500 ETF)"
                .to_string(),
            "Consider adding a small-cap or emerging markets ETF for higher growth \
             potential (10–20% of portfolio)"
                .to_string(),
            "Choose a zero/low-fee platform: Trading 212, InvestEngine, or Freetrade for \
             smaller balances"
                .to_string(),
            "For larger portfolios (£50k+), consider flat-fee platforms like Interactive \
             Investor (£5.99/mo)"
                .to_string(),
            "Keep total fees under 1% — accept higher volatility for potentially higher \
             long-term returns"
                .to_string(),
            "Set up a regular monthly investment to benefit from pound-cost averaging \
             through market dips"
                .to_string(),
        ]),
        _ => actions.extend([
            "Buy a balanced global index fund or ETF (e.g. Vanguard LifeStrategy 60% \
             Equity, FTSE Global All Cap)"
                .to_string(),
            "Choose a zero/low-fee platform: Trading 212, InvestEngine, or Freetrade for \
             smaller balances"
                .to_string(),
            "For larger portfolios (£50k+), consider flat-fee platforms like Interactive \
             Investor (£5.99/mo)"
                .to_string(),
            "Keep total fees under 1% (platform + fund fees combined)".to_string(),
            "Set up a regular monthly investment to benefit from pound-cost averaging"
                .to_string(),
            "Rebalance once a year to maintain your target equity/bond split".to_string(),
        ]),
    }

    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::readiness::evaluator::{
        evaluate_readiness, IncomeStability, SavingsAccountType, YesNo,
    };
    use rust_decimal_macros::dec;

    fn phase_four_answers(risk: Option<RiskTolerance>) -> SurveyAnswers {
        SurveyAnswers {
            has_high_interest_debt: Some(YesNo::No),
            monthly_essentials: dec!(1500),
            current_savings: dec!(10_000),
            income_stability: Some(IncomeStability::Stable),
            savings_account_type: Some(SavingsAccountType::HighYield),
            risk_tolerance: risk,
            ..Default::default()
        }
    }

    #[test]
    fn test_risk_branches_produce_distinct_guidance() {
        let conservative = evaluate_readiness(&phase_four_answers(Some(RiskTolerance::Conservative)))
            .unwrap()
            .result;
        let balanced = evaluate_readiness(&phase_four_answers(Some(RiskTolerance::Balanced)))
            .unwrap()
            .result;
        let aggressive = evaluate_readiness(&phase_four_answers(Some(RiskTolerance::Aggressive)))
            .unwrap()
            .result;

        let actions = |r: &crate::readiness::PhaseResult| r.phases[3].actions.clone();
        assert_ne!(actions(&conservative), actions(&balanced));
        assert_ne!(actions(&balanced), actions(&aggressive));
        assert_ne!(actions(&conservative), actions(&aggressive));

        assert!(actions(&conservative).iter().any(|a| a.contains("bond")));
        assert!(actions(&aggressive).iter().any(|a| a.contains("100% equity")));
    }

    #[test]
    fn test_unanswered_risk_falls_back_to_balanced() {
        let unanswered = evaluate_readiness(&phase_four_answers(None)).unwrap().result;
        let balanced = evaluate_readiness(&phase_four_answers(Some(RiskTolerance::Balanced)))
            .unwrap()
            .result;
        assert_eq!(unanswered.phases[3].actions, balanced.phases[3].actions);
        assert!(unanswered.phases[3].summary.contains("balanced"));
    }

    #[test]
    fn test_funded_emergency_summary_avoids_contradictory_advice() {
        let mut answers = phase_four_answers(Some(RiskTolerance::Balanced));
        answers.current_savings = dec!(1000);
        let result = evaluate_readiness(&answers).unwrap().result;
        assert_eq!(result.current_phase, 2);
        assert!(result.phases[1].summary.contains("short"));
        assert!(result.phases[1]
            .actions
            .iter()
            .any(|a| a.contains("Target: £4,500")));

        answers.current_savings = dec!(4500);
        answers.savings_account_type = Some(SavingsAccountType::Standard);
        let funded = evaluate_readiness(&answers).unwrap().result;
        assert_eq!(funded.current_phase, 3);
        assert!(funded.phases[1].summary.contains("fully funded"));
        assert_eq!(funded.phases[1].actions, vec!["Completed".to_string()]);
    }

    #[test]
    fn test_locked_phases_carry_placeholder_guidance() {
        let mut answers = phase_four_answers(Some(RiskTolerance::Balanced));
        answers.has_high_interest_debt = Some(YesNo::Yes);
        let result = evaluate_readiness(&answers).unwrap().result;

        assert_eq!(result.current_phase, 1);
        assert_eq!(result.phases[1].actions, vec!["Complete Phase 1 first".to_string()]);
        assert_eq!(
            result.phases[3].actions,
            vec!["Complete earlier phases first".to_string()]
        );
    }
}
