use axum::{Json, extract::State};
use serde_json::Value;

use crate::{
    error::AppError,
    message::{ChatRequest, CompletionRequest},
    state::SharedState,
};

/// Relay one user message to the inference backend and hand its JSON back untouched.
pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<Value>, AppError> {
    tracing::debug!(
        model = %state.config.model,
        chars = payload.message.chars().count(),
        "relaying chat message"
    );

    let request = CompletionRequest::for_user_message(&state.config, payload.message);

    let reply = state.inference.complete(&request).await?;
    Ok(Json(reply))
}
