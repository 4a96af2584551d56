//! Text generation backends and the response generator built on them.

pub mod fallback;
pub mod gemini;
pub mod generator;

use async_trait::async_trait;
use thiserror::Error;

/// Why the external generation call produced no usable text.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("network error: {0}")]
    Network(String),

    #[error("rate limited by upstream")]
    RateLimited,

    #[error("upstream returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("could not decode upstream response: {0}")]
    Decode(String),

    #[error("prompt blocked: {0}")]
    Blocked(String),

    #[error("upstream returned no text")]
    EmptyResponse,
}

/// A single-shot text generation backend.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, UpstreamError>;
}
