//! Portfolio Calculators
//!
//! Read-only computations over a `PortfolioRepository`:
//!
//! - **Valuation**: holdings at their latest NAV, floating and realized profit
//! - **Profit**: portfolio and single-fund profit over a day, week or month
//! - **Attribution**: why a fund moved, through its top holdings' industries
//! - **Report**: the daily snapshot with gainers, losers and alerts

pub mod valuation;
pub mod profit;
pub mod attribution;
pub mod report;
pub mod error;

pub use valuation::{HoldingService, HoldingValuation};
pub use profit::{Baseline, FundProfit, HoldingPeriodProfit, PeriodProfit, ProfitService};
pub use attribution::{explain_change, AttributionService, IndustryWeight};
pub use report::{Alert, AlertKind, DailyReport, FundPerformance, HoldingSummary, ReportConfig, ReportService};
pub use error::PortfolioError;
