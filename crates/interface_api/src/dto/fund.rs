//! Fund DTOs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::FundId;
use domain_fund::{Fund, FundPrice, FundType};
use domain_portfolio::IndustryWeight;

/// Samples returned when `days` is omitted
pub const DEFAULT_PRICE_DAYS: usize = 30;

#[derive(Debug, Default, Deserialize, Validate)]
pub struct PriceQuery {
    #[validate(range(min = 1, max = 365))]
    pub days: Option<usize>,
}

impl PriceQuery {
    pub fn days(&self) -> usize {
        self.days.unwrap_or(DEFAULT_PRICE_DAYS)
    }
}

/// A fund with its most recent NAV
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FundResponse {
    pub id: FundId,
    pub code: String,
    pub name: String,
    #[serde(rename = "type")]
    pub fund_type: FundType,
    pub manager: String,
    pub latest_nav: Option<Decimal>,
    pub nav_date: Option<NaiveDate>,
    pub change_percent: Option<Decimal>,
}

impl FundResponse {
    pub fn new(fund: Fund, latest: Option<FundPrice>) -> Self {
        Self {
            id: fund.id,
            code: fund.code,
            name: fund.name,
            fund_type: fund.fund_type,
            manager: fund.manager,
            latest_nav: latest.as_ref().map(|p| p.nav),
            nav_date: latest.as_ref().map(|p| p.date),
            change_percent: latest.map(|p| p.change_percent),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceHistoryResponse {
    pub fund_id: FundId,
    pub fund_name: String,
    /// Newest first
    pub prices: Vec<FundPrice>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustryResponse {
    pub fund_id: FundId,
    pub fund_name: String,
    pub industries: Vec<IndustryWeight>,
}
