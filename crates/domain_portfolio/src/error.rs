//! Portfolio calculator errors

use thiserror::Error;

use domain_fund::FundError;

/// Errors raised while computing portfolio figures
#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error(transparent)]
    Fund(#[from] FundError),

    #[error("Fund not found: {0}")]
    FundNotFound(String),
}
