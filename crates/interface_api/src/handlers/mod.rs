//! Request handlers

pub mod chat;
pub mod frontend;
pub mod fund;
pub mod health;
pub mod report;
