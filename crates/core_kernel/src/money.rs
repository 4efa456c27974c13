//! Decimal helpers for portfolio amounts
//!
//! All amounts in the system are renminbi values held as `rust_decimal::Decimal`.
//! Rounding only happens at the presentation edge (`format_amount`,
//! `format_percent`).

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Decimal places used when displaying currency amounts
pub const CURRENCY_DP: u32 = 2;

/// Decimal places used when displaying percentages
pub const PERCENT_DP: u32 = 2;

/// Rounds an amount to currency precision (2 decimal places, half away from zero)
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(CURRENCY_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Market value of a position: shares × NAV, unrounded
///
/// # Example
///
/// ```rust
/// use core_kernel::money::market_value;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(market_value(dec!(1000), dec!(1.52)), dec!(1520));
/// ```
pub fn market_value(shares: Decimal, nav: Decimal) -> Decimal {
    shares * nav
}

/// Expresses `part` as a percentage of `base`
///
/// Returns zero when `base` is zero or negative.
pub fn percent_of(part: Decimal, base: Decimal) -> Decimal {
    if base <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    part / base * dec!(100)
}

/// Relative change from `from` to `to`, in percent
pub fn percent_change(from: Decimal, to: Decimal) -> Decimal {
    percent_of(to - from, from)
}

/// Formats an amount with exactly two decimal places (`1234.5` → `"1234.50"`)
pub fn format_amount(value: Decimal) -> String {
    format!("{:.2}", round_currency(value))
}

/// Formats a percentage with exactly two decimal places, without the `%` sign
pub fn format_percent(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(PERCENT_DP, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

/// Formats a share count without trailing zeros (`1000.00` → `"1000"`)
pub fn format_shares(value: Decimal) -> String {
    value.normalize().to_string()
}
