//! Core Kernel - Foundational types shared by every crate of the fund chat service
//!
//! - Decimal helpers for amounts and percentages
//! - Query periods (day / week / month windows)
//! - Common identifiers

pub mod money;
pub mod period;
pub mod identifiers;
pub mod error;

pub use period::Period;
pub use identifiers::{FundId, HoldingId, UserId, RealizedProfitId, MessageId};
pub use error::CoreError;
