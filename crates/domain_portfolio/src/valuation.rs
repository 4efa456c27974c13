//! Holdings valuation
//!
//! Values each of a user's holdings at the fund's latest NAV and splits the
//! result into floating (unrealized) and realized profit.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use core_kernel::{money, FundId, HoldingId, UserId};
use domain_fund::{PortfolioRepository, Position};

use crate::error::PortfolioError;

/// Valuation of a single holding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingValuation {
    pub holding_id: HoldingId,
    pub fund_id: FundId,
    pub fund_code: String,
    pub fund_name: String,
    pub shares: Decimal,
    pub cost_price: Decimal,
    /// Latest NAV, absent when the fund has no price
    pub latest_nav: Option<Decimal>,
    /// Date of the latest NAV
    pub nav_date: Option<NaiveDate>,
    /// shares × latest NAV (zero without a price)
    pub current_value: Decimal,
    /// shares × cost price
    pub cost_value: Decimal,
    pub floating_profit: Decimal,
    pub floating_profit_percent: Decimal,
    pub realized_profit: Decimal,
    /// floating + realized
    pub total_profit: Decimal,
}

/// Service computing holding valuations
#[derive(Clone)]
pub struct HoldingService {
    repository: Arc<dyn PortfolioRepository>,
}

impl HoldingService {
    /// Creates a new holding service over a repository
    pub fn new(repository: Arc<dyn PortfolioRepository>) -> Self {
        Self { repository }
    }

    /// A user's holdings joined with their funds
    pub fn positions(&self, user_id: &UserId) -> Result<Vec<Position>, PortfolioError> {
        Ok(self.repository.positions(user_id)?)
    }

    /// Values every holding of a user, in holding order
    ///
    /// # Errors
    ///
    /// Returns an error if a holding references an unknown fund
    pub fn valuations(&self, user_id: &UserId) -> Result<Vec<HoldingValuation>, PortfolioError> {
        let positions = self.positions(user_id)?;
        debug!(user = %user_id, holdings = positions.len(), "Valuing holdings");

        Ok(positions.iter().map(|p| self.value_position(p)).collect())
    }

    /// Values a single position
    pub fn value_position(&self, position: &Position) -> HoldingValuation {
        let holding = &position.holding;
        let latest = self.repository.latest_price(&holding.fund_id);

        let current_value = latest
            .as_ref()
            .map(|p| holding.value_at_nav(p.nav))
            .unwrap_or(Decimal::ZERO);
        let cost_value = holding.cost_value();
        let floating_profit = current_value - cost_value;
        let realized_profit = self.repository.realized_profit_total(&holding.id);

        HoldingValuation {
            holding_id: holding.id.clone(),
            fund_id: holding.fund_id.clone(),
            fund_code: position.fund.code.clone(),
            fund_name: position.fund.name.clone(),
            shares: holding.shares,
            cost_price: holding.cost_price,
            latest_nav: latest.as_ref().map(|p| p.nav),
            nav_date: latest.as_ref().map(|p| p.date),
            current_value,
            cost_value,
            floating_profit,
            floating_profit_percent: money::percent_of(floating_profit, cost_value),
            realized_profit,
            total_profit: floating_profit + realized_profit,
        }
    }
}
