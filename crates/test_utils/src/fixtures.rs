//! Pre-built Test Fixtures
//!
//! A small hand-computed portfolio whose figures are known exactly, plus the
//! seeded sample store for tests that need realistic volume.
//!
//! `PortfolioFixtures::store()` holds, for `user1` on 2024-06-28:
//!
//! | holding | fund | shares | cost | NAVs (oldest → newest) |
//! |---------|------|--------|------|------------------------|
//! | h1 | f1 易方达消费精选 | 1000 | 1.50 | 1.60, 1.62, 1.70 |
//! | h2 | f2 华夏成长 | 2000 | 2.00 | 2.00, 1.95, 1.90 |
//! | h3 | f1 易方达消费精选 | 500 | 1.55 | (as h1) |
//! | h4 | f3 招商中证白酒 | 100 | 1.00 | none |
//! | h5 | f4 中欧时代先锋 | 1000 | 1.00 | 1.10 |
//!
//! `user2` owns one holding (h6, 10 shares of f2).

use std::sync::Arc;

use chrono::NaiveDate;
use core_kernel::{FundId, UserId};
use domain_fund::{Fund, FundTopHolding, FundType, PortfolioRepository, RealizedProfit};
use infra_store::{sample_store, InMemoryStore, SeedConfig};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::builders::{PriceSeriesBuilder, TestHoldingBuilder};

static SAMPLE_STORE: Lazy<Arc<InMemoryStore>> = Lazy::new(|| {
    let config = SeedConfig::new(DateFixtures::as_of()).with_rng_seed(DateFixtures::RNG_SEED);
    Arc::new(sample_store(&config).expect("sample store seeds"))
});

/// Fixture dates
pub struct DateFixtures;

impl DateFixtures {
    /// Seed used for the sample store
    pub const RNG_SEED: u64 = 20240628;

    /// Date of the newest price in every fixture
    pub fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 28).unwrap()
    }

    pub fn day_before() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 27).unwrap()
    }

    pub fn purchase_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
    }
}

/// Fixture funds
pub struct FundFixtures;

impl FundFixtures {
    pub fn consumer() -> Fund {
        Fund::new(FundId::from("f1"), "110022", "易方达消费精选", FundType::Equity, "张坤")
    }

    pub fn growth() -> Fund {
        Fund::new(FundId::from("f2"), "000001", "华夏成长", FundType::Mixed, "王亚伟")
    }

    /// A fund without any price
    pub fn unpriced() -> Fund {
        Fund::new(FundId::from("f3"), "161725", "招商中证白酒", FundType::Index, "侯昊")
    }

    /// A fund with a single price
    pub fn newly_listed() -> Fund {
        Fund::new(FundId::from("f4"), "001938", "中欧时代先锋", FundType::Equity, "周应波")
    }

    pub fn all() -> Vec<Fund> {
        vec![Self::consumer(), Self::growth(), Self::unpriced(), Self::newly_listed()]
    }
}

/// Fixture portfolios
pub struct PortfolioFixtures;

impl PortfolioFixtures {
    /// Day profit of `user1`: 80 + 40 - 100 + 100
    pub const DAY_PROFIT: Decimal = dec!(120);

    /// Baseline value of `user1` for the day period
    pub const DAY_BASELINE: Decimal = dec!(7330);

    /// Week profit of `user1`: 100 + 50 - 200 + 100
    pub const WEEK_PROFIT: Decimal = dec!(50);

    /// Value of `user1` at the latest NAVs (h4 is unpriced)
    pub const CURRENT_VALUE: Decimal = dec!(7450);

    /// The hand-computed store described in the module docs
    pub fn store() -> InMemoryStore {
        InMemoryStore::builder()
            .funds(FundFixtures::all())
            .holdings([
                TestHoldingBuilder::new().with_id("h1").with_fund("f1").with_shares(dec!(1000)).with_cost_price(dec!(1.50)).build(),
                TestHoldingBuilder::new().with_id("h2").with_fund("f2").with_shares(dec!(2000)).with_cost_price(dec!(2.00)).build(),
                TestHoldingBuilder::new().with_id("h3").with_fund("f1").with_shares(dec!(500)).with_cost_price(dec!(1.55)).build(),
                TestHoldingBuilder::new().with_id("h4").with_fund("f3").with_shares(dec!(100)).with_cost_price(dec!(1.00)).build(),
                TestHoldingBuilder::new().with_id("h5").with_fund("f4").with_shares(dec!(1000)).with_cost_price(dec!(1.00)).build(),
                TestHoldingBuilder::new().with_id("h6").with_fund("f2").with_user("user2").with_shares(dec!(10)).build(),
            ])
            .prices(PriceSeriesBuilder::new("f1").navs([dec!(1.60), dec!(1.62), dec!(1.70)]).build())
            .prices(PriceSeriesBuilder::new("f2").navs([dec!(2.00), dec!(1.95), dec!(1.90)]).build())
            .prices(PriceSeriesBuilder::new("f4").navs([dec!(1.10)]).build())
            .top_holdings([
                FundTopHolding::new(FundId::from("f1"), "海天味业", "603288", dec!(0.06), "食品"),
                FundTopHolding::new(FundId::from("f1"), "贵州茅台", "600519", dec!(0.15), "白酒"),
                FundTopHolding::new(FundId::from("f2"), "中国平安", "601318", dec!(0.10), "金融"),
            ])
            .realized_profit(RealizedProfit::new(
                "rp1".into(),
                "h1".into(),
                NaiveDate::from_ymd_opt(2024, 2, 15).unwrap(),
                dec!(120.5),
            ))
            .build()
            .expect("fixture store is consistent")
    }

    /// The hand-computed store as a shared repository
    pub fn repository() -> Arc<dyn PortfolioRepository> {
        Arc::new(Self::store())
    }

    /// A store with funds but no holdings
    pub fn empty_repository() -> Arc<dyn PortfolioRepository> {
        Arc::new(
            InMemoryStore::builder()
                .funds(FundFixtures::all())
                .build()
                .expect("fixture store is consistent"),
        )
    }

    /// The seeded 8-fund sample store, shared across tests
    pub fn sample() -> Arc<InMemoryStore> {
        SAMPLE_STORE.clone()
    }

    /// The user that owns the fixture portfolio
    pub fn user() -> UserId {
        UserId::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_store_counts() {
        let stats = PortfolioFixtures::store().stats();
        assert_eq!(stats.funds, 4);
        assert_eq!(stats.holdings, 6);
        assert_eq!(stats.prices, 7);
        assert_eq!(stats.top_holdings, 3);
    }

    #[test]
    fn test_sample_store_is_shared() {
        let first = PortfolioFixtures::sample();
        let second = PortfolioFixtures::sample();
        assert!(Arc::ptr_eq(&first, &second));
    }
}
