//! Property-Based Test Generators
//!
//! Proptest strategies for portfolio figures and chat input.

use core_kernel::Period;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for NAVs between 0.50 and 5.00 at 2 dp
pub fn nav_strategy() -> impl Strategy<Value = Decimal> {
    (50i64..=500i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for whole share counts
pub fn shares_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..100_000i64).prop_map(Decimal::from)
}

/// Strategy for NAV series of 1 to 40 samples, oldest first
pub fn nav_series_strategy() -> impl Strategy<Value = Vec<Decimal>> {
    prop::collection::vec(nav_strategy(), 1..40)
}

/// Strategy for daily change percents between -10% and 10% at 2 dp
pub fn change_percent_strategy() -> impl Strategy<Value = Decimal> {
    (-1000i64..=1000i64).prop_map(|bp| Decimal::new(bp, 2))
}

pub fn period_strategy() -> impl Strategy<Value = Period> {
    prop_oneof![Just(Period::Day), Just(Period::Week), Just(Period::Month)]
}

/// Strategy for sample fund names the classifier can extract
///
/// Only names ending in 基金, 精选 or 成长 are recognised in free text.
pub fn suffixed_fund_name_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["易方达消费精选", "华夏成长", "易方达蓝筹精选", "银河创新成长"])
}

/// Strategy for chat text free of any classifier keyword
///
/// Draws from Latin letters, digits and punctuation only, so no Chinese
/// keyword or fund name can appear.
pub fn keyword_free_text_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ?!.,]{0,40}"
}
