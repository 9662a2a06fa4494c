//! Axum route handlers for the Chat API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::chat::store::DEFAULT_CONVERSATION_ID;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    pub conversation_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub conversation_id: String,
    pub status: String,
}

pub const TIMEOUT_MESSAGE: &str = "AI service took too long to respond. Please try again.";

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/chat
///
/// Validates the message, resolves an answer under the overall timeout, then records
/// the completed turn. A timed-out or failed request leaves history untouched.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = request.message.trim().to_string();
    if message.is_empty() {
        return Err(AppError::Validation("Message cannot be empty".to_string()));
    }

    let conversation_id = request
        .conversation_id
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_CONVERSATION_ID.to_string());

    let span = info_span!("chat", request_id = %Uuid::new_v4(), conversation_id = %conversation_id);

    async move {
        let history = state.store.get_history(&conversation_id).await;

        // Resolution runs on its own task; on timeout the task is aborted and its result
        // can never reach the store.
        let resolver = state.resolver.clone();
        let task_message = message.clone();
        let mut task = tokio::spawn(
            async move { resolver.resolve(&task_message, &history).await }.in_current_span(),
        );

        let resolution = match tokio::time::timeout(state.chat_timeout, &mut task).await {
            Ok(joined) => joined.map_err(|e| AppError::Internal(e.into()))?,
            Err(_) => {
                task.abort();
                return Err(AppError::Timeout(TIMEOUT_MESSAGE.to_string()));
            }
        };

        info!(source = %resolution.source, "chat resolved");

        state
            .store
            .append_turn(&conversation_id, &message, &resolution.response)
            .await;

        Ok(Json(ChatResponse {
            response: resolution.response,
            conversation_id,
            status: "success".to_string(),
        }))
    }
    .instrument(span)
    .await
}

/// GET /api/chat/health
pub async fn handle_chat_health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "message": "Chat API is running"
    }))
}
