//! Test Data Builders
//!
//! Builders with sensible defaults so tests only spell out the fields they
//! care about.

use chrono::{Days, NaiveDate};
use core_kernel::{FundId, HoldingId, UserId};
use domain_fund::{FundPrice, Holding};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::fixtures::DateFixtures;

/// Builder for holdings
pub struct TestHoldingBuilder {
    id: HoldingId,
    fund_id: FundId,
    user_id: UserId,
    shares: Decimal,
    cost_price: Decimal,
    purchase_date: NaiveDate,
}

impl Default for TestHoldingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestHoldingBuilder {
    /// Creates a builder for 1000 shares of `f1` at 1.00 owned by `user1`
    pub fn new() -> Self {
        Self {
            id: HoldingId::from("h1"),
            fund_id: FundId::from("f1"),
            user_id: UserId::default(),
            shares: dec!(1000),
            cost_price: dec!(1.00),
            purchase_date: DateFixtures::purchase_date(),
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = HoldingId::from(id);
        self
    }

    pub fn with_fund(mut self, fund_id: &str) -> Self {
        self.fund_id = FundId::from(fund_id);
        self
    }

    pub fn with_user(mut self, user_id: &str) -> Self {
        self.user_id = UserId::from(user_id);
        self
    }

    pub fn with_shares(mut self, shares: Decimal) -> Self {
        self.shares = shares;
        self
    }

    pub fn with_cost_price(mut self, cost_price: Decimal) -> Self {
        self.cost_price = cost_price;
        self
    }

    pub fn with_purchase_date(mut self, date: NaiveDate) -> Self {
        self.purchase_date = date;
        self
    }

    /// Builds the holding
    ///
    /// # Panics
    ///
    /// Panics if shares or cost price are negative
    pub fn build(self) -> Holding {
        Holding::new(
            self.id,
            self.fund_id,
            self.user_id,
            self.shares,
            self.cost_price,
            self.purchase_date,
        )
        .expect("test holding must be valid")
    }
}

/// Builder for a fund's consecutive daily prices
///
/// NAVs are given oldest first; the last one lands on the end date.
pub struct PriceSeriesBuilder {
    fund_id: FundId,
    end: NaiveDate,
    navs: Vec<Decimal>,
}

impl PriceSeriesBuilder {
    pub fn new(fund_id: &str) -> Self {
        Self {
            fund_id: FundId::from(fund_id),
            end: DateFixtures::as_of(),
            navs: Vec::new(),
        }
    }

    /// Sets the date of the newest price
    pub fn ending(mut self, end: NaiveDate) -> Self {
        self.end = end;
        self
    }

    /// Appends NAVs, oldest first
    pub fn navs(mut self, navs: impl IntoIterator<Item = Decimal>) -> Self {
        self.navs.extend(navs);
        self
    }

    /// Builds the prices oldest first, each change derived from the day before
    pub fn build(self) -> Vec<FundPrice> {
        let count = self.navs.len() as u64;
        let mut previous = None;
        self.navs
            .into_iter()
            .enumerate()
            .map(|(i, nav)| {
                let date = self
                    .end
                    .checked_sub_days(Days::new(count - 1 - i as u64))
                    .expect("price series within calendar range");
                let price = FundPrice::following(self.fund_id.clone(), date, nav, previous);
                previous = Some(price.nav);
                price
            })
            .collect()
    }
}
