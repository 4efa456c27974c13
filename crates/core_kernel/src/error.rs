//! Kernel errors

use thiserror::Error;

/// Errors raised while parsing kernel values
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    #[error("Invalid message id: {0}")]
    InvalidMessageId(#[from] uuid::Error),
}
