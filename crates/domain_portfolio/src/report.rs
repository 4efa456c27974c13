//! Daily report
//!
//! A snapshot of a user's portfolio for one date: per-holding summaries
//! measured against cost, the day's profit, gainers and losers with an
//! attribution sentence, large-move alerts and market commentary.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use tracing::{debug, info};

use core_kernel::{money, FundId, Period, UserId};
use domain_fund::PortfolioRepository;

use crate::attribution::AttributionService;
use crate::error::PortfolioError;
use crate::profit::ProfitService;
use crate::valuation::HoldingService;

const MARKET_HIGHLIGHTS: [&str; 3] = [
    "白酒板块今日表现强势，多只重仓白酒的基金净值上涨",
    "金融板块震荡调整，相关基金净值小幅波动",
    "建议关注明日市场情绪变化，适时调整持仓结构",
];

/// Report tuning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Alerts fire when |profit percent| exceeds this many percent
    pub alert_threshold: Decimal,
    /// Number of gainers and of losers listed
    pub top_n: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            alert_threshold: dec!(3),
            top_n: 3,
        }
    }
}

/// One holding as it appears in the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingSummary {
    pub fund_id: FundId,
    pub fund_name: String,
    pub shares: Decimal,
    pub current_value: Decimal,
    /// Profit against cost price
    pub profit: Decimal,
    pub profit_percent: Decimal,
}

/// A gainer or loser with the reason for its latest move
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FundPerformance {
    pub fund_id: FundId,
    pub fund_name: String,
    pub profit: Decimal,
    pub profit_percent: Decimal,
    pub change_reason: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    LargeGain,
    LargeLoss,
}

/// Notice about a holding that moved beyond the alert threshold
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub fund_id: FundId,
    pub fund_name: String,
    pub message: String,
}

impl Alert {
    fn for_holding(holding: &HoldingSummary) -> Self {
        let (kind, verb) = if holding.profit_percent > Decimal::ZERO {
            (AlertKind::LargeGain, "大幅上涨")
        } else {
            (AlertKind::LargeLoss, "大幅下跌")
        };
        Self {
            kind,
            fund_id: holding.fund_id.clone(),
            fund_name: holding.fund_name.clone(),
            message: format!(
                "{}{}{}%",
                holding.fund_name,
                verb,
                money::format_percent(holding.profit_percent.abs())
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyReport {
    pub date: NaiveDate,
    pub total_value: Decimal,
    /// Day-period profit
    pub total_profit: Decimal,
    pub total_profit_percent: Decimal,
    pub holdings: Vec<HoldingSummary>,
    pub top_gainers: Vec<FundPerformance>,
    pub top_losers: Vec<FundPerformance>,
    pub alerts: Vec<Alert>,
    pub market_highlights: Vec<String>,
}

/// Service assembling daily reports
#[derive(Clone)]
pub struct ReportService {
    holdings: HoldingService,
    profit: ProfitService,
    attribution: AttributionService,
    config: ReportConfig,
}

impl ReportService {
    /// Creates a report service with the default configuration
    pub fn new(repository: Arc<dyn PortfolioRepository>) -> Self {
        Self::with_config(repository, ReportConfig::default())
    }

    pub fn with_config(repository: Arc<dyn PortfolioRepository>, config: ReportConfig) -> Self {
        Self {
            holdings: HoldingService::new(repository.clone()),
            profit: ProfitService::new(repository.clone()),
            attribution: AttributionService::new(repository),
            config,
        }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Builds the report of `user_id` for `date`
    ///
    /// # Errors
    ///
    /// Returns an error if a holding references an unknown fund
    pub fn daily_report(&self, user_id: &UserId, date: NaiveDate) -> Result<DailyReport, PortfolioError> {
        let summaries: Vec<HoldingSummary> = self
            .holdings
            .valuations(user_id)?
            .into_iter()
            .map(|v| {
                let (profit, profit_percent) = if v.latest_nav.is_some() {
                    (v.floating_profit, v.floating_profit_percent)
                } else {
                    (Decimal::ZERO, Decimal::ZERO)
                };
                HoldingSummary {
                    fund_id: v.fund_id,
                    fund_name: v.fund_name,
                    shares: v.shares,
                    current_value: v.current_value,
                    profit,
                    profit_percent,
                }
            })
            .collect();

        let day = self.profit.period_profit(user_id, Period::Day)?;
        let total_value: Decimal = summaries.iter().map(|h| h.current_value).sum();

        let mut gainers: Vec<&HoldingSummary> = summaries
            .iter()
            .filter(|h| h.profit_percent > Decimal::ZERO)
            .collect();
        gainers.sort_by(|a, b| b.profit_percent.cmp(&a.profit_percent));

        let mut losers: Vec<&HoldingSummary> = summaries
            .iter()
            .filter(|h| h.profit_percent < Decimal::ZERO)
            .collect();
        losers.sort_by(|a, b| a.profit_percent.cmp(&b.profit_percent));

        let top_gainers = self.performances(&gainers);
        let top_losers = self.performances(&losers);
        let alerts = self.alerts(&summaries);

        info!(
            user = %user_id,
            %date,
            holdings = summaries.len(),
            alerts = alerts.len(),
            "Generated daily report"
        );

        Ok(DailyReport {
            date,
            total_value,
            total_profit: day.total_profit,
            total_profit_percent: day.total_profit_percent,
            holdings: summaries,
            top_gainers,
            top_losers,
            alerts,
            market_highlights: MARKET_HIGHLIGHTS.iter().map(|s| s.to_string()).collect(),
        })
    }

    /// Alerts for every holding beyond the threshold, in holding order
    pub fn alerts(&self, holdings: &[HoldingSummary]) -> Vec<Alert> {
        holdings
            .iter()
            .filter(|h| h.profit_percent.abs() > self.config.alert_threshold)
            .map(Alert::for_holding)
            .collect()
    }

    fn performances(&self, ranked: &[&HoldingSummary]) -> Vec<FundPerformance> {
        ranked
            .iter()
            .take(self.config.top_n)
            .map(|h| {
                let change_reason = self.attribution.explain_latest(&h.fund_id);
                debug!(fund = %h.fund_id, %change_reason, "Attributed move");
                FundPerformance {
                    fund_id: h.fund_id.clone(),
                    fund_name: h.fund_name.clone(),
                    profit: h.profit,
                    profit_percent: h.profit_percent,
                    change_reason,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(name: &str, profit_percent: Decimal) -> HoldingSummary {
        HoldingSummary {
            fund_id: FundId::from(name),
            fund_name: name.to_string(),
            shares: dec!(100),
            current_value: dec!(100),
            profit: profit_percent,
            profit_percent,
        }
    }

    #[test]
    fn test_alert_messages() {
        let gain = Alert::for_holding(&summary("华夏成长", dec!(5.126)));
        assert_eq!(gain.kind, AlertKind::LargeGain);
        assert_eq!(gain.message, "华夏成长大幅上涨5.13%");

        let loss = Alert::for_holding(&summary("华夏回报", dec!(-4)));
        assert_eq!(loss.kind, AlertKind::LargeLoss);
        assert_eq!(loss.message, "华夏回报大幅下跌4.00%");
    }

    #[test]
    fn test_alert_kind_serializes_snake_case() {
        let alert = Alert::for_holding(&summary("x", dec!(10)));
        let json = serde_json::to_value(&alert).unwrap();
        assert_eq!(json["type"], "large_gain");
        assert_eq!(json["fundName"], "x");
    }

    #[test]
    fn test_default_config() {
        let config = ReportConfig::default();
        assert_eq!(config.alert_threshold, dec!(3));
        assert_eq!(config.top_n, 3);
    }
}
