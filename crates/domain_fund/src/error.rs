//! Fund domain errors

use thiserror::Error;

/// Errors that can occur in the fund domain
#[derive(Debug, Error)]
pub enum FundError {
    #[error("Fund not found: {0}")]
    FundNotFound(String),

    #[error("Holding not found: {0}")]
    HoldingNotFound(String),

    #[error("Invalid holding: {0}")]
    InvalidHolding(String),

    #[error("Holding {holding_id} references unknown fund {fund_id}")]
    DanglingHolding { holding_id: String, fund_id: String },
}
