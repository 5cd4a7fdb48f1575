// src/routes/chat.rs
use axum::{Json, body::Bytes, extract::State};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::chatbot::reply_to,
    state::SharedState,
};

/// `POST /chat`. The body is parsed as JSON whatever its `Content-Type`.
pub async fn chat_handler(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<ChatResponse>, AppError> {
    let payload = ChatRequest::from_slice(&body)
        .map_err(|e| AppError::BadRequest(format!("invalid chat request: {e}")))?;

    let reply = reply_to(state.provider.as_ref(), &payload).await;

    Ok(Json(ChatResponse { reply }))
}
