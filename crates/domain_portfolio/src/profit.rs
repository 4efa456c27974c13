//! Profit over a period
//!
//! Each holding is valued at the newest NAV sample of its fund and compared
//! with a baseline taken from the same fixed-length window of samples
//! (`Period::window`): the oldest sample in the window. For `Day` that is the
//! previous NAV. Windows are counted in samples, not calendar days.
//!
//! A fund with a single sample has no earlier NAV, so the holding's cost price
//! is used as the baseline instead. Holdings of funds without any price are
//! left out of the aggregate.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use core_kernel::{money, FundId, HoldingId, Period, UserId};
use domain_fund::{PortfolioRepository, Position};

use crate::error::PortfolioError;

/// Where a holding's baseline value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "source", rename_all = "camelCase")]
pub enum Baseline {
    /// The oldest NAV sample in the period window
    PriceSample { date: NaiveDate },
    /// The holding's cost price (only one sample available)
    CostPrice,
}

/// Profit of one holding over a period
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingPeriodProfit {
    pub holding_id: HoldingId,
    pub fund_id: FundId,
    pub fund_name: String,
    pub current_value: Decimal,
    pub baseline_value: Decimal,
    pub baseline: Baseline,
    pub profit: Decimal,
    pub profit_percent: Decimal,
}

/// Aggregate profit of a user's portfolio over a period
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodProfit {
    pub period: Period,
    /// Chinese period label (今日 / 本周 / 本月)
    pub label: String,
    pub current_value: Decimal,
    pub baseline_value: Decimal,
    pub total_profit: Decimal,
    pub total_profit_percent: Decimal,
    pub holdings: Vec<HoldingPeriodProfit>,
}

/// Profit of a single fund (all of the user's holdings in it) over a period
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FundProfit {
    pub fund_id: FundId,
    pub fund_name: String,
    pub period: Period,
    pub label: String,
    pub holdings_count: usize,
    pub current_value: Decimal,
    pub baseline_value: Decimal,
    pub profit: Decimal,
    pub profit_percent: Decimal,
}

/// Service computing period profits
#[derive(Clone)]
pub struct ProfitService {
    repository: Arc<dyn PortfolioRepository>,
}

impl ProfitService {
    /// Creates a new profit service over a repository
    pub fn new(repository: Arc<dyn PortfolioRepository>) -> Self {
        Self { repository }
    }

    /// Aggregate profit of all of a user's holdings over `period`
    ///
    /// `total_profit` always equals the sum of the per-holding profits.
    pub fn period_profit(&self, user_id: &UserId, period: Period) -> Result<PeriodProfit, PortfolioError> {
        let positions = self.repository.positions(user_id)?;
        let holdings: Vec<HoldingPeriodProfit> = positions
            .iter()
            .filter_map(|p| self.holding_profit(p, period))
            .collect();

        let current_value: Decimal = holdings.iter().map(|h| h.current_value).sum();
        let baseline_value: Decimal = holdings.iter().map(|h| h.baseline_value).sum();
        let total_profit: Decimal = holdings.iter().map(|h| h.profit).sum();

        debug!(
            user = %user_id,
            period = %period,
            priced = holdings.len(),
            skipped = positions.len() - holdings.len(),
            "Computed period profit"
        );

        Ok(PeriodProfit {
            period,
            label: period.label().to_string(),
            current_value,
            baseline_value,
            total_profit,
            total_profit_percent: money::percent_of(total_profit, baseline_value),
            holdings,
        })
    }

    /// Profit of the user's holdings in the fund matching `fund_name`
    ///
    /// Returns `None` when no holding matches the name or the matched fund
    /// has no price samples.
    pub fn fund_profit(
        &self,
        user_id: &UserId,
        fund_name: &str,
        period: Period,
    ) -> Result<Option<FundProfit>, PortfolioError> {
        let positions = self.repository.positions_by_fund_name(user_id, fund_name)?;
        let Some(first) = positions.first() else {
            debug!(user = %user_id, fund_name, "No holding matches fund name");
            return Ok(None);
        };

        let profits: Vec<HoldingPeriodProfit> = positions
            .iter()
            .filter_map(|p| self.holding_profit(p, period))
            .collect();
        if profits.is_empty() {
            return Ok(None);
        }

        let current_value: Decimal = profits.iter().map(|h| h.current_value).sum();
        let baseline_value: Decimal = profits.iter().map(|h| h.baseline_value).sum();
        let profit = current_value - baseline_value;

        Ok(Some(FundProfit {
            fund_id: first.fund.id.clone(),
            fund_name: first.fund.name.clone(),
            period,
            label: period.label().to_string(),
            holdings_count: profits.len(),
            current_value,
            baseline_value,
            profit,
            profit_percent: money::percent_of(profit, baseline_value),
        }))
    }

    /// Profit of one holding over `period`, `None` if its fund has no price
    pub fn holding_profit(&self, position: &Position, period: Period) -> Option<HoldingPeriodProfit> {
        let holding = &position.holding;
        let window = self.repository.price_history(&holding.fund_id, period.window());
        let current = window.first()?;

        let (baseline_nav, baseline) = match window.last() {
            Some(oldest) if window.len() >= 2 => (oldest.nav, Baseline::PriceSample { date: oldest.date }),
            _ => (holding.cost_price, Baseline::CostPrice),
        };

        let current_value = holding.value_at_nav(current.nav);
        let baseline_value = holding.value_at_nav(baseline_nav);
        let profit = current_value - baseline_value;

        Some(HoldingPeriodProfit {
            holding_id: holding.id.clone(),
            fund_id: holding.fund_id.clone(),
            fund_name: position.fund.name.clone(),
            current_value,
            baseline_value,
            baseline,
            profit,
            profit_percent: money::percent_of(profit, baseline_value),
        })
    }
}
