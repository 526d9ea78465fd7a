//! Investment-growth projection engine.
//!
//! Three modes share one set of compound-interest mechanics: recurring
//! monthly contributions, a single lump sum, and goal seeking (solve for
//! the deposit that reaches a target). All operations are pure functions
//! of their input struct.
//!
//! Rate convention: the annual percentage rate is divided by 12 to get the
//! per-month rate (nominal/12, compounded monthly), and that same rate
//! drives both the iterative schedule and the closed-form final balance.

pub mod goal;
pub mod lump_sum;
pub mod recurring;
pub mod schedule;

pub use goal::{solve_goal_based, GoalBasedResult, GoalInput};
pub use lump_sum::{project_lump_sum, LumpSumInput};
pub use recurring::{project_recurring, CalculationResult, RecurringInput};
pub use schedule::MonthlyBreakdown;

pub(crate) const METHODOLOGY_NOMINAL_MONTHLY: &str =
    "Nominal annual rate divided by 12, compounded monthly; iterative schedule \
     and closed-form future value use the same per-month rate";
