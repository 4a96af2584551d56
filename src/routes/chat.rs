use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use uuid::Uuid;

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::{
        fallback::{SERVICE_ISSUE_RESPONSES, pick},
        generator::Reply,
    },
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Some(generator) = state.generator.clone() else {
        return Err(AppError::ServiceUnavailable);
    };

    let (message, emotion_context) = match payload {
        Ok(Json(ChatRequest { message: Some(message), emotion_context })) => (message, emotion_context),
        Ok(_) => return Err(AppError::BadRequest("Message is required".to_string())),
        Err(rejection) => {
            tracing::debug!(%rejection, "rejected chat payload");
            return Err(AppError::BadRequest("Message is required".to_string()));
        }
    };

    let trimmed = message.trim().to_string();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest("Message cannot be empty".to_string()));
    }

    let request_id = Uuid::new_v4();
    tracing::info!(%request_id, message_len = trimmed.len(), "chat request");

    // A panic inside the generator surfaces here as a JoinError.
    let task = tokio::spawn(async move {
        generator.get_response(&trimmed, emotion_context.as_deref()).await
    });

    let response = match task.await {
        Ok(Reply::Generated(text)) => ChatResponse::success(text),
        Ok(Reply::Fallback { text, reason }) => {
            tracing::warn!(%request_id, %reason, "serving generator fallback");
            ChatResponse::fallback(text)
        }
        Err(err) => {
            tracing::error!(%request_id, error = %err, "error in chat endpoint");
            ChatResponse::fallback(pick(&SERVICE_ISSUE_RESPONSES))
        }
    };

    Ok(Json(response))
}
