//! Tests for decimal amount helpers

use core_kernel::money::{
    format_amount, format_percent, format_shares, market_value, percent_change, percent_of,
    round_currency,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn test_market_value_is_unrounded() {
    assert_eq!(market_value(dec!(1500), dec!(1.653)), dec!(2479.500));
}

#[test]
fn test_round_currency_half_away_from_zero() {
    assert_eq!(round_currency(dec!(2.345)), dec!(2.35));
    assert_eq!(round_currency(dec!(-2.345)), dec!(-2.35));
}

#[test]
fn test_percent_of() {
    assert_eq!(percent_of(dec!(50), dec!(1000)), dec!(5));
    assert_eq!(percent_of(dec!(-30), dec!(600)), dec!(-5));
}

#[test]
fn test_percent_of_non_positive_base_is_zero() {
    assert_eq!(percent_of(dec!(12), Decimal::ZERO), Decimal::ZERO);
}

#[test]
fn test_percent_change_loss() {
    assert_eq!(percent_change(dec!(2.00), dec!(1.90)), dec!(-5));
}

#[test]
fn test_format_helpers() {
    assert_eq!(format_amount(dec!(0)), "0.00");
    assert_eq!(format_amount(dec!(1520)), "1520.00");
    assert_eq!(format_percent(dec!(-3.456)), "-3.46");
    assert_eq!(format_shares(dec!(800)), "800");
    assert_eq!(format_shares(dec!(1200.50)), "1200.5");
}
