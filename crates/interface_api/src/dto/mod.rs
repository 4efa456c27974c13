//! Request/Response DTOs

pub mod chat;
pub mod fund;
pub mod report;
