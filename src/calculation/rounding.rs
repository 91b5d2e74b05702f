//! Rounding policy shared by every pipeline stage.
//!
//! The engine applies one uniform discipline: day counts are rounded to one
//! decimal first, and every derived figure (saved days, efficiency,
//! investments, saved cost) is computed from the rounded day values, with
//! money rounded to whole currency units at the point a record is built.
//! This keeps each reported row internally consistent with the totals
//! derived from it.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a money amount to the nearest whole currency unit,
/// half away from zero.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a day count to one decimal place, half away from zero.
pub fn round_days(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a percentage to one decimal place, half away from zero.
pub fn round_rate(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}
