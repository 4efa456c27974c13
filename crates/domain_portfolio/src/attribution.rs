//! Price-move attribution
//!
//! Explains a fund's daily NAV move through the industries of its disclosed
//! top holdings. The explanation is descriptive only: the heaviest industry is
//! named as the driver regardless of how the stocks actually moved.

use std::sync::Arc;

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::Serialize;

use core_kernel::{money, FundId};
use domain_fund::top_holding::sort_by_weight;
use domain_fund::{FundTopHolding, PortfolioRepository};

use crate::error::PortfolioError;

/// Total top-holding weight of one industry within a fund
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustryWeight {
    pub industry: String,
    pub weight: Decimal,
}

/// Service explaining fund moves through their top holdings
#[derive(Clone)]
pub struct AttributionService {
    repository: Arc<dyn PortfolioRepository>,
}

impl AttributionService {
    /// Creates a new attribution service over a repository
    pub fn new(repository: Arc<dyn PortfolioRepository>) -> Self {
        Self { repository }
    }

    /// A fund's top holdings, heaviest first
    pub fn top_holdings(&self, fund_id: &FundId) -> Vec<FundTopHolding> {
        let mut holdings = self.repository.top_holdings(fund_id);
        sort_by_weight(&mut holdings);
        holdings
    }

    /// Weight per industry for a known fund, heaviest first
    ///
    /// # Errors
    ///
    /// Returns `PortfolioError::FundNotFound` for an unknown fund id
    pub fn industry_distribution(&self, fund_id: &FundId) -> Result<Vec<IndustryWeight>, PortfolioError> {
        if self.repository.fund(fund_id).is_none() {
            return Err(PortfolioError::FundNotFound(fund_id.to_string()));
        }
        Ok(industry_distribution(&self.top_holdings(fund_id)))
    }

    /// Explains a move of `change_percent` for a fund
    pub fn explain(&self, fund_id: &FundId, change_percent: Decimal) -> String {
        explain_change(&self.top_holdings(fund_id), change_percent)
    }

    /// Explains the fund's latest daily move (flat when it has no price)
    pub fn explain_latest(&self, fund_id: &FundId) -> String {
        let change_percent = self
            .repository
            .latest_price(fund_id)
            .map(|p| p.change_percent)
            .unwrap_or(Decimal::ZERO);
        self.explain(fund_id, change_percent)
    }
}

/// Sums weights per industry, heaviest first
///
/// Holdings without an industry are ignored. Industries with equal weight
/// keep the order in which they first appear.
pub fn industry_distribution(top_holdings: &[FundTopHolding]) -> Vec<IndustryWeight> {
    let mut totals: Vec<IndustryWeight> = Vec::new();

    for holding in top_holdings {
        let Some(industry) = holding.industry.as_deref() else {
            continue;
        };
        match totals.iter_mut().find(|t| t.industry == industry) {
            Some(total) => total.weight += holding.weight,
            None => totals.push(IndustryWeight {
                industry: industry.to_string(),
                weight: holding.weight,
            }),
        }
    }

    totals.sort_by(|a, b| b.weight.cmp(&a.weight));
    totals
}

/// Composes the attribution sentence for a daily move
///
/// `今日净值上涨1.23%，主要因重仓的白酒行业上涨，其中贵州茅台（权重15.0%）影响较大`
///
/// A zero change yields `今日净值持平` alone. It is not rendered as a 0.00%
/// fall and carries no industry clause.
pub fn explain_change(top_holdings: &[FundTopHolding], change_percent: Decimal) -> String {
    if change_percent.is_zero() {
        return "今日净值持平".to_string();
    }

    let direction = if change_percent > Decimal::ZERO { "上涨" } else { "下跌" };
    let mut reason = format!(
        "今日净值{}{}%",
        direction,
        money::format_percent(change_percent.abs())
    );

    let Some(top_industry) = industry_distribution(top_holdings).into_iter().next() else {
        return reason;
    };
    reason.push_str(&format!("，主要因重仓的{}行业{}", top_industry.industry, direction));

    let mut sorted = top_holdings.to_vec();
    sort_by_weight(&mut sorted);
    if let Some(top_stock) = sorted.first() {
        let weight = (top_stock.weight * dec!(100))
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
        reason.push_str(&format!(
            "，其中{}（权重{:.1}%）影响较大",
            top_stock.stock_name, weight
        ));
    }

    reason
}

#[cfg(test)]
mod tests {
    use super::*;

    fn top(name: &str, weight: Decimal, industry: &str) -> FundTopHolding {
        FundTopHolding::new(FundId::from("f1"), name, "000000", weight, industry)
    }

    #[test]
    fn test_distribution_groups_and_sorts() {
        let holdings = vec![
            top("贵州茅台", dec!(0.12), "白酒"),
            top("腾讯控股", dec!(0.10), "科技"),
            top("美团", dec!(0.09), "科技"),
            top("招商银行", dec!(0.08), "金融"),
        ];

        let distribution = industry_distribution(&holdings);
        assert_eq!(distribution[0].industry, "科技");
        assert_eq!(distribution[0].weight, dec!(0.19));
        assert_eq!(distribution[1].industry, "白酒");
        assert_eq!(distribution.len(), 3);
    }

    #[test]
    fn test_distribution_skips_unclassified() {
        let holdings = vec![top("某公司", dec!(0.5), "x").unclassified(), top("五粮液", dec!(0.1), "白酒")];
        let distribution = industry_distribution(&holdings);
        assert_eq!(distribution.len(), 1);
        assert_eq!(distribution[0].industry, "白酒");
    }

    #[test]
    fn test_explain_rise() {
        let holdings = vec![top("贵州茅台", dec!(0.15), "白酒"), top("海天味业", dec!(0.06), "食品")];
        assert_eq!(
            explain_change(&holdings, dec!(1.234)),
            "今日净值上涨1.23%，主要因重仓的白酒行业上涨，其中贵州茅台（权重15.0%）影响较大"
        );
    }

    #[test]
    fn test_explain_fall_without_disclosures() {
        assert_eq!(explain_change(&[], dec!(-0.5)), "今日净值下跌0.50%");
    }

    #[test]
    fn test_explain_flat() {
        let holdings = vec![top("贵州茅台", dec!(0.15), "白酒")];
        assert_eq!(explain_change(&holdings, Decimal::ZERO), "今日净值持平");
    }
}
