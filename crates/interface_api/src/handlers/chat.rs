//! Chat handlers

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::{error, info};
use validator::Validate;

use domain_assistant::ChatMessage;

use crate::dto::chat::*;
use crate::{error::ApiError, AppState};

const CHAT_FAILURE: &str = "处理消息时发生错误";

/// Answers one chat message
///
/// Rejects a missing, non-string or blank `message` with 400. Failures while
/// answering are logged and reported with a generic message.
pub async fn send_message(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(request) = payload?;
    request.validate()?;

    let user_id = request.user_or(state.config.default_user());
    let today = state.config.today();

    let reply = state
        .assistant
        .respond(&request.message, &user_id, today)
        .map_err(|e| {
            error!(user = %user_id, error = %e, "Failed to answer chat message");
            ApiError::Internal(CHAT_FAILURE.to_string())
        })?;

    info!(user = %user_id, intent = reply.intent.kind(), "Answered chat message");

    Ok(Json(ChatResponse {
        message: ChatMessage::assistant(reply.answer, reply.charts),
        intent: reply.intent,
        data: reply.data,
    }))
}

/// Conversation history; nothing is persisted, so always empty
pub async fn history() -> Json<HistoryResponse> {
    Json(HistoryResponse { messages: Vec::new() })
}
