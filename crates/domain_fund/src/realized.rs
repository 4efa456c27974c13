//! Gains locked in by partial redemptions

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{HoldingId, RealizedProfitId};

/// Profit realized when part of a holding was redeemed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealizedProfit {
    pub id: RealizedProfitId,
    pub holding_id: HoldingId,
    pub date: NaiveDate,
    pub profit: Decimal,
}

impl RealizedProfit {
    pub fn new(id: RealizedProfitId, holding_id: HoldingId, date: NaiveDate, profit: Decimal) -> Self {
        Self {
            id,
            holding_id,
            date,
            profit,
        }
    }
}

/// Sums the realized profit of the given records
pub fn total_realized<'a>(records: impl IntoIterator<Item = &'a RealizedProfit>) -> Decimal {
    records.into_iter().map(|r| r.profit).sum()
}
