//! Money display helpers.
//!
//! Amounts are always `rust_decimal::Decimal`; never floating point.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of fractional digits shown for currency amounts.
pub const DISPLAY_SCALE: u32 = 2;

/// Largest amount accepted for a single entry: `999_999_999_999.99`.
///
/// Matches the `amount` column's CHECK constraint. Category totals stay far
/// below `Decimal::MAX` for any realistic number of entries.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(276_447_231, 23_283, 0, false, DISPLAY_SCALE);

/// Formats an amount with exactly two decimal places.
///
/// Half-way values round away from zero (`0.005` becomes `0.01`).
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    let mut rounded =
        amount.round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(DISPLAY_SCALE);
    rounded.to_string()
}

#[cfg(test)]
#[path = "money_tests.rs"]
mod tests;
