//! Net Asset Value (NAV) prices
//!
//! One `FundPrice` row exists per fund per trading day. The calendar date is the
//! only ordering key.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use core_kernel::{money, FundId};

/// Decimal places of a published NAV
pub const NAV_DP: u32 = 2;

/// Decimal places of the daily change amount
pub const CHANGE_DP: u32 = 3;

/// A daily NAV price point
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundPrice {
    /// Fund ID
    pub fund_id: FundId,
    /// Valuation date
    pub date: NaiveDate,
    /// NAV per share
    pub nav: Decimal,
    /// Change versus the previous day's NAV
    pub change: Decimal,
    /// Change versus the previous day's NAV, in percent
    pub change_percent: Decimal,
}

impl FundPrice {
    /// Creates a price point with explicit change figures
    pub fn new(
        fund_id: FundId,
        date: NaiveDate,
        nav: Decimal,
        change: Decimal,
        change_percent: Decimal,
    ) -> Self {
        Self {
            fund_id,
            date,
            nav,
            change,
            change_percent,
        }
    }

    /// Creates a price point, deriving the change from the previous day's NAV
    ///
    /// The NAV is rounded to 2 dp, the change to 3 dp and the change percent
    /// to 2 dp. Without a previous NAV both change figures are zero.
    pub fn following(fund_id: FundId, date: NaiveDate, nav: Decimal, previous_nav: Option<Decimal>) -> Self {
        let nav = nav.round_dp_with_strategy(NAV_DP, RoundingStrategy::MidpointAwayFromZero);
        let (change, change_percent) = match previous_nav {
            Some(prev) if !prev.is_zero() => (
                (nav - prev).round_dp_with_strategy(CHANGE_DP, RoundingStrategy::MidpointAwayFromZero),
                money::percent_change(prev, nav)
                    .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
            ),
            _ => (Decimal::ZERO, Decimal::ZERO),
        };

        Self::new(fund_id, date, nav, change, change_percent)
    }

    /// Returns true if the NAV rose on this day
    pub fn is_up(&self) -> bool {
        self.change_percent > Decimal::ZERO
    }
}

/// NAV history of a single fund, kept in ascending date order
#[derive(Debug, Clone)]
pub struct NavHistory {
    pub fund_id: FundId,
    pub prices: Vec<FundPrice>,
}

impl NavHistory {
    /// Creates an empty NAV history
    pub fn new(fund_id: FundId) -> Self {
        Self {
            fund_id,
            prices: Vec::new(),
        }
    }

    /// Builds a history from prices in any order
    ///
    /// Prices belonging to other funds are dropped.
    pub fn from_prices(fund_id: FundId, prices: impl IntoIterator<Item = FundPrice>) -> Self {
        let mut history = Self::new(fund_id);
        history.prices = prices
            .into_iter()
            .filter(|p| p.fund_id == history.fund_id)
            .collect();
        history.prices.sort_by(|a, b| a.date.cmp(&b.date));
        history
    }

    /// Adds a price record, replacing any existing record for the same date
    pub fn add(&mut self, price: FundPrice) {
        self.prices.retain(|p| p.date != price.date);
        self.prices.push(price);
        self.prices.sort_by(|a, b| a.date.cmp(&b.date));
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Returns true if there are no samples
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Gets the latest price
    pub fn latest(&self) -> Option<&FundPrice> {
        self.prices.last()
    }

    /// Gets the price for a specific date
    pub fn at_date(&self, date: NaiveDate) -> Option<&FundPrice> {
        self.prices.iter().find(|p| p.date == date)
    }

    /// The `limit` most recent samples, newest first
    pub fn recent(&self, limit: usize) -> Vec<FundPrice> {
        self.prices.iter().rev().take(limit).cloned().collect()
    }

    /// Calculates the return between two dates, as a fraction
    pub fn calculate_return(&self, from: NaiveDate, to: NaiveDate) -> Option<Decimal> {
        let start = self.at_date(from)?;
        let end = self.at_date(to)?;

        if start.nav.is_zero() {
            return None;
        }

        Some((end.nav - start.nav) / start.nav)
    }
}
