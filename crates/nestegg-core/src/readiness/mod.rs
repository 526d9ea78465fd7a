//! Financial-readiness questionnaire evaluation.
//!
//! A fixed survey feeds a four-phase gating state machine: clear
//! high-interest debt, fund emergency savings, optimize cash storage,
//! begin investing. Evaluation is stateless; every answer change
//! recomputes the whole plan from scratch.

pub mod evaluator;
pub mod guidance;

pub use evaluator::{
    evaluate_readiness, IncomeStability, InvestmentExperience, PhaseDescriptor, PhaseResult,
    PhaseStatus, RiskTolerance, SavingsAccountType, SurveyAnswers, YesNo,
};
