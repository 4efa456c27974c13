//! Chat DTOs

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{Validate, ValidationError};

use core_kernel::UserId;
use domain_assistant::{ChatMessage, Intent};

/// Longest chat message accepted, in characters
pub const MAX_MESSAGE_CHARS: u64 = 2000;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[validate(length(max = MAX_MESSAGE_CHARS), custom(function = "not_blank"))]
    pub message: String,
    pub user_id: Option<String>,
}

impl ChatRequest {
    /// The requested user, or `fallback` when none (or a blank id) is given
    pub fn user_or(&self, fallback: UserId) -> UserId {
        match self.user_id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => UserId::from(id),
            _ => fallback,
        }
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub message: ChatMessage,
    pub intent: Intent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub messages: Vec<ChatMessage>,
}
