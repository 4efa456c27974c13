//! Portfolio Repository Port
//!
//! The `PortfolioRepository` trait is the only way calculators and handlers
//! read portfolio data. Implementations are injected as
//! `Arc<dyn PortfolioRepository>`:
//!
//! - **In-memory store**: seeded fixture data (`infra_store`)
//! - **Test stores**: hand-built datasets (`test_utils`)
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_fund::ports::PortfolioRepository;
//! use std::sync::Arc;
//!
//! pub struct HoldingService {
//!     repository: Arc<dyn PortfolioRepository>,
//! }
//!
//! impl HoldingService {
//!     pub fn positions(&self, user: &UserId) -> Result<Vec<Position>, FundError> {
//!         self.repository.positions(user)
//!     }
//! }
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{FundId, HoldingId, UserId};

use crate::error::FundError;
use crate::fund::Fund;
use crate::holding::Holding;
use crate::nav::FundPrice;
use crate::realized::{total_realized, RealizedProfit};
use crate::top_holding::FundTopHolding;

/// A holding joined with the fund it references
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    #[serde(flatten)]
    pub holding: Holding,
    pub fund: Fund,
}

/// Read access to funds, holdings, prices and disclosures
///
/// All list methods return owned records. Ordering guarantees are part of the
/// contract and noted per method.
pub trait PortfolioRepository: Send + Sync {
    /// All funds, in insertion order
    fn funds(&self) -> Vec<Fund>;

    /// A single fund
    fn fund(&self, id: &FundId) -> Option<Fund>;

    /// A user's holdings, in insertion order
    fn holdings_for_user(&self, user_id: &UserId) -> Vec<Holding>;

    /// The `limit` most recent price samples of a fund, newest first
    fn price_history(&self, fund_id: &FundId, limit: usize) -> Vec<FundPrice>;

    /// A fund's disclosed top holdings, heaviest first
    fn top_holdings(&self, fund_id: &FundId) -> Vec<FundTopHolding>;

    /// Realized profit records of a holding
    fn realized_profits(&self, holding_id: &HoldingId) -> Vec<RealizedProfit>;

    /// The most recent price sample of a fund
    fn latest_price(&self, fund_id: &FundId) -> Option<FundPrice> {
        self.price_history(fund_id, 1).into_iter().next()
    }

    /// Sum of realized profit of a holding (zero when there is none)
    fn realized_profit_total(&self, holding_id: &HoldingId) -> Decimal {
        total_realized(&self.realized_profits(holding_id))
    }

    /// A user's holdings joined with their funds
    ///
    /// # Errors
    ///
    /// Returns `FundError::DanglingHolding` if a holding references a fund
    /// the repository does not know
    fn positions(&self, user_id: &UserId) -> Result<Vec<Position>, FundError> {
        self.holdings_for_user(user_id)
            .into_iter()
            .map(|holding| {
                let fund = self.fund(&holding.fund_id).ok_or_else(|| FundError::DanglingHolding {
                    holding_id: holding.id.to_string(),
                    fund_id: holding.fund_id.to_string(),
                })?;
                Ok(Position { holding, fund })
            })
            .collect()
    }

    /// A user's positions in the first fund whose name matches `fund_name`
    ///
    /// Funds are tried in the order the user's holdings list them. Every
    /// holding of the matched fund is returned; an empty vector means no
    /// holding matched.
    fn positions_by_fund_name(&self, user_id: &UserId, fund_name: &str) -> Result<Vec<Position>, FundError> {
        let positions = self.positions(user_id)?;
        let Some(matched) = positions
            .iter()
            .find(|p| p.fund.matches_name(fund_name))
            .map(|p| p.fund.id.clone())
        else {
            return Ok(Vec::new());
        };

        Ok(positions
            .into_iter()
            .filter(|p| p.fund.id == matched)
            .collect())
    }
}
