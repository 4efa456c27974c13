//! Top stock holdings disclosed by a fund

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::FundId;

/// One of a fund's disclosed heavyweight stock positions
///
/// Weights are fractions of fund assets (`0.15` = 15%). Nothing requires the
/// weights of a fund to sum to 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundTopHolding {
    /// Fund ID
    pub fund_id: FundId,
    /// Stock name
    pub stock_name: String,
    /// Stock code
    pub stock_code: String,
    /// Weight in the fund, as a fraction
    pub weight: Decimal,
    /// Industry of the stock, when classified
    pub industry: Option<String>,
}

impl FundTopHolding {
    /// Creates a top holding in a classified industry
    pub fn new(
        fund_id: FundId,
        stock_name: impl Into<String>,
        stock_code: impl Into<String>,
        weight: Decimal,
        industry: impl Into<String>,
    ) -> Self {
        Self {
            fund_id,
            stock_name: stock_name.into(),
            stock_code: stock_code.into(),
            weight,
            industry: Some(industry.into()),
        }
    }

    /// Removes the industry classification
    pub fn unclassified(mut self) -> Self {
        self.industry = None;
        self
    }
}

/// Sorts top holdings by weight, heaviest first (stable for equal weights)
pub fn sort_by_weight(holdings: &mut [FundTopHolding]) {
    holdings.sort_by(|a, b| b.weight.cmp(&a.weight));
}
