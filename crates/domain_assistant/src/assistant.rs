//! Intent dispatch
//!
//! Runs a classified intent against the portfolio calculators and renders the
//! answer text, the structured data and any charts for the reply.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use core_kernel::money::{format_amount, format_percent, format_shares};
use core_kernel::{Period, UserId};
use domain_fund::PortfolioRepository;
use domain_portfolio::{
    AttributionService, DailyReport, HoldingService, HoldingValuation, ProfitService, ReportService,
};

use crate::chat::{ChartData, ChartKind, ChartPoint};
use crate::error::AssistantError;
use crate::faq::KnowledgeBase;
use crate::intent::{Intent, IntentClassifier};

/// Answer to one chat message
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantReply {
    pub intent: Intent,
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    pub charts: Vec<ChartData>,
}

impl AssistantReply {
    fn text(intent: Intent, answer: impl Into<String>) -> Self {
        Self {
            intent,
            answer: answer.into(),
            data: None,
            charts: Vec::new(),
        }
    }

    fn with_data(mut self, data: &impl Serialize) -> Result<Self, AssistantError> {
        self.data = Some(serde_json::to_value(data)?);
        Ok(self)
    }
}

/// The chat assistant: classifier plus calculators
#[derive(Clone)]
pub struct Assistant {
    classifier: IntentClassifier,
    knowledge: KnowledgeBase,
    holdings: HoldingService,
    profit: ProfitService,
    attribution: AttributionService,
    report: ReportService,
}

impl Assistant {
    pub fn new(repository: Arc<dyn PortfolioRepository>) -> Self {
        Self::with_report(repository.clone(), ReportService::new(repository))
    }

    /// Creates an assistant that builds reports with `report`
    pub fn with_report(repository: Arc<dyn PortfolioRepository>, report: ReportService) -> Self {
        Self {
            classifier: IntentClassifier::new(),
            knowledge: KnowledgeBase::new(),
            holdings: HoldingService::new(repository.clone()),
            profit: ProfitService::new(repository.clone()),
            attribution: AttributionService::new(repository),
            report,
        }
    }

    /// Classifies and answers `message` for `user_id`
    ///
    /// `today` is the date reports are issued for.
    pub fn respond(&self, message: &str, user_id: &UserId, today: NaiveDate) -> Result<AssistantReply, AssistantError> {
        let intent = self.classifier.classify(message);
        info!(user = %user_id, intent = intent.kind(), "Classified chat message");
        self.execute(intent, user_id, today)
    }

    /// Answers an already classified intent
    pub fn execute(&self, intent: Intent, user_id: &UserId, today: NaiveDate) -> Result<AssistantReply, AssistantError> {
        match intent {
            Intent::QueryHoldings => self.holdings_reply(user_id),
            Intent::QueryProfit { period } => self.profit_reply(user_id, period),
            Intent::QueryFund { fund_name, period } => self.fund_reply(user_id, fund_name, period),
            Intent::QueryReport => self.report_reply(user_id, today),
            Intent::Qa { question } => {
                let answer = self.knowledge.answer(&question);
                Ok(AssistantReply::text(Intent::Qa { question }, answer))
            }
        }
    }

    fn holdings_reply(&self, user_id: &UserId) -> Result<AssistantReply, AssistantError> {
        let valuations = self.holdings.valuations(user_id)?;
        if valuations.is_empty() {
            return Ok(AssistantReply::text(Intent::QueryHoldings, "您目前没有持仓记录。"));
        }

        let lines: Vec<String> = valuations
            .iter()
            .map(|v| {
                format!(
                    "- {}：持仓{}份，当前价值{}元",
                    v.fund_name,
                    format_shares(v.shares),
                    format_amount(v.current_value)
                )
            })
            .collect();

        let mut reply = AssistantReply::text(
            Intent::QueryHoldings,
            format!("您目前持有以下基金：\n{}", lines.join("\n")),
        )
        .with_data(&valuations)?;
        reply.charts.push(allocation_chart(&valuations));
        Ok(reply)
    }

    fn profit_reply(&self, user_id: &UserId, period: Period) -> Result<AssistantReply, AssistantError> {
        let profit = self.profit.period_profit(user_id, period)?;
        let answer = format!(
            "{}总收益：{}元，收益率{}%",
            profit.label,
            format_amount(profit.total_profit),
            format_percent(profit.total_profit_percent)
        );
        AssistantReply::text(Intent::QueryProfit { period }, answer).with_data(&profit)
    }

    fn fund_reply(&self, user_id: &UserId, fund_name: String, period: Period) -> Result<AssistantReply, AssistantError> {
        let Some(profit) = self.profit.fund_profit(user_id, &fund_name, period)? else {
            debug!(user = %user_id, %fund_name, "Fund query without matching holding");
            let answer = format!("未找到基金\"{}\"的持仓记录。", fund_name);
            return Ok(AssistantReply::text(Intent::QueryFund { fund_name, period }, answer));
        };
        let intent = Intent::QueryFund { fund_name, period };

        let reason = self.attribution.explain_latest(&profit.fund_id);
        let answer = format!(
            "{}{}收益：{}元，收益率{}%\n{}",
            profit.fund_name,
            profit.label,
            format_amount(profit.profit),
            format_percent(profit.profit_percent),
            reason
        );
        AssistantReply::text(intent, answer).with_data(&profit)
    }

    fn report_reply(&self, user_id: &UserId, today: NaiveDate) -> Result<AssistantReply, AssistantError> {
        let report = self.report.daily_report(user_id, today)?;
        AssistantReply::text(Intent::QueryReport, report_digest(&report)).with_data(&report)
    }
}

/// Pie chart of current value per fund, in order of first appearance
fn allocation_chart(valuations: &[HoldingValuation]) -> ChartData {
    let mut points: Vec<ChartPoint> = Vec::new();
    for valuation in valuations {
        match points.iter_mut().find(|p| p.name == valuation.fund_name) {
            Some(point) => point.value += valuation.current_value,
            None => points.push(ChartPoint {
                name: valuation.fund_name.clone(),
                value: valuation.current_value,
            }),
        }
    }
    ChartData::new(ChartKind::Pie, "持仓分布", points)
}

/// Multi-line chat rendering of a daily report
pub fn report_digest(report: &DailyReport) -> String {
    let mut text = format!(
        "今日持仓日报：\n总资产：{}元\n总收益：{}元（{}%）\n\n涨幅前三：\n",
        format_amount(report.total_value),
        format_amount(report.total_profit),
        format_percent(report.total_profit_percent)
    );

    if report.top_gainers.is_empty() {
        text.push_str("- 暂无\n");
    }
    for gainer in &report.top_gainers {
        text.push_str(&format!("- {}：{}%\n", gainer.fund_name, format_percent(gainer.profit_percent)));
    }

    if !report.alerts.is_empty() {
        text.push_str("\n异动提醒：\n");
        for alert in &report.alerts {
            text.push_str(&format!("- {}\n", alert.message));
        }
    }

    if let Some(highlight) = report.market_highlights.first() {
        text.push_str(&format!("\n明日要点：{}", highlight));
    }
    text
}
