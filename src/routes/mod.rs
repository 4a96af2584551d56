// src/routes/mod.rs
pub mod chat;
pub mod health;

use std::any::Any;

use crate::config::ConfigError;
use crate::error::AppError;
use crate::state::SharedState;
use axum::{
    Router,
    http::{HeaderValue, Method, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chat::chat_handler;
use health::health_handler;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    with_error_handling(api_routes())
}

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/chat", post(chat_handler))
}

/// JSON 404 for unknown paths, JSON 500 for handler panics, and request
/// tracing. Applies to every route already on `router`.
pub fn with_error_handling(router: Router<SharedState>) -> Router<SharedState> {
    router.fallback(not_found).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CatchPanicLayer::custom(handle_panic)),
    )
}

/// Allows only the configured frontend origin.
pub fn cors_layer(frontend_url: &str) -> Result<CorsLayer, ConfigError> {
    let origin = HeaderValue::from_str(frontend_url.trim_end_matches('/'))
        .map_err(|_| ConfigError::InvalidFrontendUrl(frontend_url.to_string()))?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]))
}

async fn not_found() -> AppError {
    AppError::NotFound
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| err.downcast_ref::<&str>().map(|s| s.to_string()))
        .unwrap_or_else(|| "unknown panic".to_string());
    AppError::Internal(detail).into_response()
}
