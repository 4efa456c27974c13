//! In-memory portfolio store
//!
//! The store is assembled once through `StoreBuilder`, which checks referential
//! integrity, and is read-only afterwards. Share it as
//! `Arc<dyn PortfolioRepository>`.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tracing::debug;

use core_kernel::{FundId, HoldingId, UserId};
use domain_fund::top_holding::sort_by_weight;
use domain_fund::{Fund, FundPrice, FundTopHolding, Holding, NavHistory, PortfolioRepository, RealizedProfit};

use crate::error::StoreError;

/// Record counts of a store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreStats {
    pub funds: usize,
    pub holdings: usize,
    pub prices: usize,
    pub top_holdings: usize,
    pub realized_profits: usize,
}

/// Immutable in-memory implementation of `PortfolioRepository`
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    funds: Vec<Fund>,
    holdings: Vec<Holding>,
    prices: HashMap<FundId, NavHistory>,
    top_holdings: HashMap<FundId, Vec<FundTopHolding>>,
    realized: Vec<RealizedProfit>,
}

impl InMemoryStore {
    /// Starts building a store
    pub fn builder() -> StoreBuilder {
        StoreBuilder::default()
    }

    /// Record counts
    pub fn stats(&self) -> StoreStats {
        StoreStats {
            funds: self.funds.len(),
            holdings: self.holdings.len(),
            prices: self.prices.values().map(NavHistory::len).sum(),
            top_holdings: self.top_holdings.values().map(Vec::len).sum(),
            realized_profits: self.realized.len(),
        }
    }

    /// Every holding in the store, across users
    pub fn all_holdings(&self) -> &[Holding] {
        &self.holdings
    }
}

impl PortfolioRepository for InMemoryStore {
    fn funds(&self) -> Vec<Fund> {
        self.funds.clone()
    }

    fn fund(&self, id: &FundId) -> Option<Fund> {
        self.funds.iter().find(|f| &f.id == id).cloned()
    }

    fn holdings_for_user(&self, user_id: &UserId) -> Vec<Holding> {
        self.holdings
            .iter()
            .filter(|h| &h.user_id == user_id)
            .cloned()
            .collect()
    }

    fn price_history(&self, fund_id: &FundId, limit: usize) -> Vec<FundPrice> {
        self.prices
            .get(fund_id)
            .map(|history| history.recent(limit))
            .unwrap_or_default()
    }

    fn top_holdings(&self, fund_id: &FundId) -> Vec<FundTopHolding> {
        self.top_holdings.get(fund_id).cloned().unwrap_or_default()
    }

    fn realized_profits(&self, holding_id: &HoldingId) -> Vec<RealizedProfit> {
        self.realized
            .iter()
            .filter(|r| &r.holding_id == holding_id)
            .cloned()
            .collect()
    }
}

/// Collects records and validates them into an `InMemoryStore`
#[derive(Debug, Default)]
pub struct StoreBuilder {
    funds: Vec<Fund>,
    holdings: Vec<Holding>,
    prices: Vec<FundPrice>,
    top_holdings: Vec<FundTopHolding>,
    realized: Vec<RealizedProfit>,
}

impl StoreBuilder {
    pub fn fund(mut self, fund: Fund) -> Self {
        self.funds.push(fund);
        self
    }

    pub fn funds(mut self, funds: impl IntoIterator<Item = Fund>) -> Self {
        self.funds.extend(funds);
        self
    }

    pub fn holding(mut self, holding: Holding) -> Self {
        self.holdings.push(holding);
        self
    }

    pub fn holdings(mut self, holdings: impl IntoIterator<Item = Holding>) -> Self {
        self.holdings.extend(holdings);
        self
    }

    /// Adds a price; a later price for the same fund and date replaces it
    pub fn price(mut self, price: FundPrice) -> Self {
        self.prices.push(price);
        self
    }

    pub fn prices(mut self, prices: impl IntoIterator<Item = FundPrice>) -> Self {
        self.prices.extend(prices);
        self
    }

    pub fn top_holding(mut self, top_holding: FundTopHolding) -> Self {
        self.top_holdings.push(top_holding);
        self
    }

    pub fn top_holdings(mut self, top_holdings: impl IntoIterator<Item = FundTopHolding>) -> Self {
        self.top_holdings.extend(top_holdings);
        self
    }

    pub fn realized_profit(mut self, realized: RealizedProfit) -> Self {
        self.realized.push(realized);
        self
    }

    pub fn realized_profits(mut self, realized: impl IntoIterator<Item = RealizedProfit>) -> Self {
        self.realized.extend(realized);
        self
    }

    /// Validates the collected records and builds the store
    ///
    /// # Errors
    ///
    /// - `DuplicateEntry` when two funds or two holdings share an id
    /// - `ForeignKeyViolation` when a holding, price or top holding names an
    ///   unknown fund, or a realized profit names an unknown holding
    pub fn build(self) -> Result<InMemoryStore, StoreError> {
        let mut fund_ids = HashSet::new();
        for fund in &self.funds {
            if !fund_ids.insert(fund.id.clone()) {
                return Err(StoreError::duplicate("Fund", &fund.id));
            }
        }

        let mut holding_ids = HashSet::new();
        for holding in &self.holdings {
            if !holding_ids.insert(holding.id.clone()) {
                return Err(StoreError::duplicate("Holding", &holding.id));
            }
            if !fund_ids.contains(&holding.fund_id) {
                return Err(StoreError::missing_reference("Holding", &holding.id, "fund", &holding.fund_id));
            }
        }

        let mut prices: HashMap<FundId, NavHistory> = HashMap::new();
        for price in self.prices {
            if !fund_ids.contains(&price.fund_id) {
                return Err(StoreError::missing_reference("Price", price.date, "fund", &price.fund_id));
            }
            prices
                .entry(price.fund_id.clone())
                .or_insert_with(|| NavHistory::new(price.fund_id.clone()))
                .add(price);
        }

        let mut top_holdings: HashMap<FundId, Vec<FundTopHolding>> = HashMap::new();
        for top in self.top_holdings {
            if !fund_ids.contains(&top.fund_id) {
                return Err(StoreError::missing_reference("Top holding", &top.stock_code, "fund", &top.fund_id));
            }
            top_holdings.entry(top.fund_id.clone()).or_default().push(top);
        }
        for list in top_holdings.values_mut() {
            sort_by_weight(list);
        }

        for realized in &self.realized {
            if !holding_ids.contains(&realized.holding_id) {
                return Err(StoreError::missing_reference(
                    "Realized profit",
                    &realized.id,
                    "holding",
                    &realized.holding_id,
                ));
            }
        }

        let store = InMemoryStore {
            funds: self.funds,
            holdings: self.holdings,
            prices,
            top_holdings,
            realized: self.realized,
        };
        debug!(stats = ?store.stats(), "Built in-memory store");
        Ok(store)
    }
}
