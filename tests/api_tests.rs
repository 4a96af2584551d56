use mentisphere_backend::message::{ChatResponse, ChatStatus, ErrorBody, HealthResponse};
use mentisphere_backend::routes::{api_routes, cors_layer, create_router, with_error_handling};
use mentisphere_backend::services::fallback::{
    FALLBACK_RESPONSES, SERVICE_ISSUE_RESPONSES, UNAVAILABLE_RESPONSE,
};
use mentisphere_backend::services::generator::ResponseGenerator;
use mentisphere_backend::services::{TextGenerator, UpstreamError};
use mentisphere_backend::state::AppState;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::routing::get;
use std::sync::Arc;
use std::time::Duration;
use tower::util::ServiceExt;

enum Mocked {
    Reply(&'static str),
    Fail,
    Panic,
}

#[async_trait]
impl TextGenerator for Mocked {
    async fn generate(&self, _prompt: &str) -> Result<String, UpstreamError> {
        match self {
            Mocked::Reply(text) => Ok(text.to_string()),
            Mocked::Fail => Err(UpstreamError::Api { status: 500, body: "boom".to_string() }),
            Mocked::Panic => panic!("generator exploded"),
        }
    }
}

fn app_with(backend: Option<Mocked>) -> Router {
    let generator = backend
        .map(|b| ResponseGenerator::new(Arc::new(b)).with_pacing(Duration::ZERO));
    create_router().with_state(Arc::new(AppState::new(generator)))
}

fn chat_request(body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/chat")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

async fn json_body<T: serde::de::DeserializeOwned>(response: Response<Body>) -> T {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body_bytes).unwrap()
}

#[tokio::test]
async fn test_chat_success() {
    let app = app_with(Some(Mocked::Reply("  You are not alone.  ")));

    let response = app
        .oneshot(chat_request(r#"{"message": "I feel overwhelmed"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let chat_resp: ChatResponse = json_body(response).await;
    assert_eq!(chat_resp.status, ChatStatus::Success);
    assert_eq!(chat_resp.response, "You are not alone.");
    assert!(chat_resp.error.is_none());
}

#[tokio::test]
async fn test_empty_and_blank_messages_are_rejected() {
    let app = app_with(Some(Mocked::Reply("unused")));

    for body in [r#"{"message": ""}"#, r#"{"message": "   "}"#] {
        let response = app.clone().oneshot(chat_request(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let err: ErrorBody = json_body(response).await;
        assert_eq!(err.error, "Message cannot be empty");
    }
}

#[tokio::test]
async fn test_missing_message_is_rejected() {
    let app = app_with(Some(Mocked::Reply("unused")));

    let response = app.clone().oneshot(chat_request("{}")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let err: ErrorBody = json_body(response).await;
    assert_eq!(err.error, "Message is required");

    // No body and no content type at all
    let req = Request::builder()
        .method("POST")
        .uri("/api/chat")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let err: ErrorBody = json_body(response).await;
    assert_eq!(err.error, "Message is required");

    let response = app.oneshot(chat_request("not json")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unavailable_generator_returns_503() {
    let app = app_with(None);

    let response = app
        .oneshot(chat_request(r#"{"message": "hello"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let err: ErrorBody = json_body(response).await;
    assert_eq!(err.error, "Chat service not available");
    assert_eq!(err.fallback_response.as_deref(), Some(UNAVAILABLE_RESPONSE));
}

#[tokio::test]
async fn test_upstream_failure_returns_fallback_with_200() {
    let app = app_with(Some(Mocked::Fail));

    let response = app
        .oneshot(chat_request(r#"{"message": "hello"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let chat_resp: ChatResponse = json_body(response).await;
    assert_eq!(chat_resp.status, ChatStatus::Fallback);
    assert_eq!(chat_resp.error.as_deref(), Some("Temporary service issue"));
    assert!(FALLBACK_RESPONSES.contains(&chat_resp.response.as_str()));
}

#[tokio::test]
async fn test_generator_panic_returns_endpoint_fallback() {
    let app = app_with(Some(Mocked::Panic));

    let response = app
        .oneshot(chat_request(r#"{"message": "hello"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let chat_resp: ChatResponse = json_body(response).await;
    assert_eq!(chat_resp.status, ChatStatus::Fallback);
    assert!(SERVICE_ISSUE_RESPONSES.contains(&chat_resp.response.as_str()));
}

#[tokio::test]
async fn test_health_reports_generator_presence() {
    for (backend, ready) in [(Some(Mocked::Reply("ok")), true), (None, false)] {
        let response = app_with(backend)
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let health: HealthResponse = json_body(response).await;
        assert_eq!(health.status, "healthy");
        assert_eq!(health.service, "MentiSphere Chat API");
        assert_eq!(health.gemini_ready, ready);
    }
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let response = app_with(None)
        .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let err: ErrorBody = json_body(response).await;
    assert_eq!(err.error, "Endpoint not found");
}

#[tokio::test]
async fn test_handler_panic_returns_500() {
    async fn explode() -> &'static str {
        panic!("handler exploded")
    }

    let app = with_error_handling(api_routes().route("/explode", get(explode)))
        .with_state(Arc::new(AppState::unavailable()));

    let response = app
        .oneshot(Request::builder().uri("/explode").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let err: ErrorBody = json_body(response).await;
    assert_eq!(err.error, "Internal server error");
}

#[tokio::test]
async fn test_cors_allows_only_frontend_origin() {
    let app = create_router()
        .with_state(Arc::new(AppState::unavailable()))
        .layer(cors_layer("http://localhost:5173").unwrap());

    let allowed = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("origin", "http://localhost:5173")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(
        allowed.headers().get("access-control-allow-origin").unwrap(),
        "http://localhost:5173"
    );

    let other = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("origin", "http://evil.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(other.headers().get("access-control-allow-origin").is_none());
}
