// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::ErrorBody;
use crate::services::fallback::UNAVAILABLE_RESPONSE;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Chat service not available")]
    ServiceUnavailable,

    #[error("Endpoint not found")]
    NotFound,

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();
        let body = match self {
            AppError::ServiceUnavailable => ErrorBody {
                error: message,
                fallback_response: Some(UNAVAILABLE_RESPONSE.to_string()),
            },
            // Details stay in the logs.
            AppError::Internal(detail) => {
                tracing::error!(%detail, "internal server error");
                ErrorBody { error: "Internal server error".to_string(), fallback_response: None }
            }
            _ => ErrorBody { error: message, fallback_response: None },
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_variants() {
        assert_eq!(AppError::BadRequest("x".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::ServiceUnavailable.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(AppError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
