//! Assistant errors

use thiserror::Error;

use domain_portfolio::PortfolioError;

/// Errors raised while answering a chat message
#[derive(Debug, Error)]
pub enum AssistantError {
    #[error(transparent)]
    Portfolio(#[from] PortfolioError),

    #[error("Failed to serialize reply data: {0}")]
    Serialization(#[from] serde_json::Error),
}
