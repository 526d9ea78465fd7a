//! Currency formatting for guidance text and CLI display.
//!
//! The engine itself returns unrounded decimals; these helpers are the
//! display collaborator (whole-unit grouping, compact K/M suffixes).

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::types::Money;

/// Format a monetary value as whole pounds with thousands separators,
/// e.g. `£4,500`. Negative values keep the sign ahead of the symbol.
pub fn gbp(value: Money) -> String {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded < Decimal::ZERO;
    let digits = rounded.abs().to_i128().unwrap_or(0).to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if negative {
        format!("-£{grouped}")
    } else {
        format!("£{grouped}")
    }
}

/// Compact form for chart axes and cards: `£1.2M`, `£85K`, else [`gbp`].
pub fn gbp_compact(value: Money) -> String {
    if value >= dec!(1_000_000) {
        let millions = (value / dec!(1_000_000))
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
        format!("£{}M", millions.normalize())
    } else if value >= dec!(1_000) {
        let thousands = (value / dec!(1_000))
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        format!("£{thousands}K")
    } else {
        gbp(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gbp_groups_thousands() {
        assert_eq!(gbp(dec!(0)), "£0");
        assert_eq!(gbp(dec!(950)), "£950");
        assert_eq!(gbp(dec!(4500)), "£4,500");
        assert_eq!(gbp(dec!(1234567)), "£1,234,567");
    }

    #[test]
    fn test_gbp_rounds_to_whole_units() {
        assert_eq!(gbp(dec!(1499.5)), "£1,500");
        assert_eq!(gbp(dec!(1499.49)), "£1,499");
    }

    #[test]
    fn test_gbp_negative() {
        assert_eq!(gbp(dec!(-2500)), "-£2,500");
    }

    #[test]
    fn test_compact_suffixes() {
        assert_eq!(gbp_compact(dec!(850)), "£850");
        assert_eq!(gbp_compact(dec!(85_000)), "£85K");
        assert_eq!(gbp_compact(dec!(1_250_000)), "£1.3M");
        assert_eq!(gbp_compact(dec!(2_000_000)), "£2M");
    }
}
