//! Conversation Domain
//!
//! Turns a free-text chat message into an answer:
//!
//! - **Intent**: keyword classification into holdings / profit / fund /
//!   report / FAQ queries
//! - **FAQ**: a small static knowledge base
//! - **Assistant**: runs the intent against the portfolio calculators and
//!   renders text, data and charts
//! - **Chat**: the message and chart records sent to the front end

pub mod intent;
pub mod faq;
pub mod chat;
pub mod assistant;
pub mod error;

pub use intent::{Intent, IntentClassifier};
pub use faq::{FaqEntry, KnowledgeBase};
pub use chat::{ChartData, ChartKind, ChartPoint, ChatMessage, Role};
pub use assistant::{Assistant, AssistantReply};
pub use error::AssistantError;
