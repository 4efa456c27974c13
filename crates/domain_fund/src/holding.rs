//! A user's position in one fund

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{money, FundId, HoldingId, UserId};
use crate::error::FundError;

/// A user's holding of fund shares
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    /// Unique identifier
    pub id: HoldingId,
    /// Fund held
    pub fund_id: FundId,
    /// Owning user
    pub user_id: UserId,
    /// Number of shares held
    pub shares: Decimal,
    /// Average cost per share
    pub cost_price: Decimal,
    /// Date of the purchase
    pub purchase_date: NaiveDate,
}

impl Holding {
    /// Creates a new holding
    ///
    /// # Errors
    ///
    /// Returns `FundError::InvalidHolding` if shares or cost price is negative
    pub fn new(
        id: HoldingId,
        fund_id: FundId,
        user_id: UserId,
        shares: Decimal,
        cost_price: Decimal,
        purchase_date: NaiveDate,
    ) -> Result<Self, FundError> {
        if shares < Decimal::ZERO {
            return Err(FundError::InvalidHolding(format!("{id}: negative shares {shares}")));
        }
        if cost_price < Decimal::ZERO {
            return Err(FundError::InvalidHolding(format!(
                "{id}: negative cost price {cost_price}"
            )));
        }

        Ok(Self {
            id,
            fund_id,
            user_id,
            shares,
            cost_price,
            purchase_date,
        })
    }

    /// Total amount paid for the shares
    pub fn cost_value(&self) -> Decimal {
        money::market_value(self.shares, self.cost_price)
    }

    /// Market value of the shares at the given NAV
    pub fn value_at_nav(&self, nav: Decimal) -> Decimal {
        money::market_value(self.shares, nav)
    }
}
