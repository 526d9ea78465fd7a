use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Projection
// ---------------------------------------------------------------------------

#[napi]
pub fn project_recurring(input_json: String) -> NapiResult<String> {
    let input: nestegg_core::projection::RecurringInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        nestegg_core::projection::project_recurring(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn project_lump_sum(input_json: String) -> NapiResult<String> {
    let input: nestegg_core::projection::LumpSumInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        nestegg_core::projection::project_lump_sum(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn solve_goal_based(input_json: String) -> NapiResult<String> {
    let input: nestegg_core::projection::GoalInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        nestegg_core::projection::solve_goal_based(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Readiness
// ---------------------------------------------------------------------------

#[napi]
pub fn evaluate_readiness(answers_json: String) -> NapiResult<String> {
    let answers: nestegg_core::readiness::SurveyAnswers =
        serde_json::from_str(&answers_json).map_err(to_napi_error)?;
    let output =
        nestegg_core::readiness::evaluate_readiness(&answers).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Formatting helpers for the presentation layer
// ---------------------------------------------------------------------------

#[napi]
pub fn format_currency(value: String) -> NapiResult<String> {
    let amount: rust_decimal::Decimal = value.parse().map_err(to_napi_error)?;
    Ok(nestegg_core::format::gbp(amount))
}

#[napi]
pub fn format_currency_compact(value: String) -> NapiResult<String> {
    let amount: rust_decimal::Decimal = value.parse().map_err(to_napi_error)?;
    Ok(nestegg_core::format::gbp_compact(amount))
}
