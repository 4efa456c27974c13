//! Custom Test Assertions
//!
//! Assertion helpers for decimal figures and ordered lists that report the
//! offending values on failure.

use rust_decimal::Decimal;

/// Asserts that a decimal value is within a range
pub fn assert_decimal_in_range(value: Decimal, min: Decimal, max: Decimal) {
    assert!(
        value >= min && value <= max,
        "Decimal {} is not in range [{}, {}]",
        value,
        min,
        max
    );
}

/// Asserts that a decimal value is approximately equal to another
pub fn assert_decimal_approx_eq(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "Decimals differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual,
        expected,
        diff,
        tolerance
    );
}

/// Asserts that a sum of parts equals a total exactly
pub fn assert_decimal_sum_equals(parts: &[Decimal], total: Decimal) {
    let sum: Decimal = parts.iter().copied().sum();
    assert_eq!(sum, total, "Parts {:?} sum to {}, expected {}", parts, sum, total);
}

/// Asserts that a NAV carries at most 2 decimal places
pub fn assert_nav_precision(nav: Decimal) {
    assert!(
        nav.normalize().scale() <= 2,
        "NAV {} exceeds 2 decimal places",
        nav
    );
}

/// Asserts that values are in non-increasing order
pub fn assert_sorted_desc(values: &[Decimal]) {
    if let Some(pos) = values.windows(2).position(|w| w[0] < w[1]) {
        panic!(
            "Values not in descending order at index {}: {} < {} in {:?}",
            pos,
            values[pos],
            values[pos + 1],
            values
        );
    }
}

/// Asserts that a result is Ok and returns the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Asserts that an error matches a specific variant
#[macro_export]
macro_rules! assert_err_variant {
    ($result:expr, $pattern:pat) => {
        match $result {
            Ok(value) => panic!("Expected Err matching {}, got Ok({:?})", stringify!($pattern), value),
            Err(ref e) => {
                assert!(
                    matches!(e, $pattern),
                    "Error {:?} does not match pattern {}",
                    e,
                    stringify!($pattern)
                );
            }
        }
    };
}
