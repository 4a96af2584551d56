// src/message.rs
use serde::{Deserialize, Serialize};

pub const SERVICE_NAME: &str = "MentiSphere Chat API";

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
    #[serde(default)]
    pub emotion_context: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatStatus {
    Success,
    Fallback,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub status: ChatStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ChatResponse {
    pub fn success(response: impl Into<String>) -> Self {
        Self { response: response.into(), status: ChatStatus::Success, error: None }
    }

    /// Degraded reply; still sent with HTTP 200.
    pub fn fallback(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            status: ChatStatus::Fallback,
            error: Some("Temporary service issue".to_string()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub gemini_ready: bool,
}

impl HealthResponse {
    pub fn healthy(gemini_ready: bool) -> Self {
        Self {
            status: "healthy".to_string(),
            service: SERVICE_NAME.to_string(),
            gemini_ready,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_response: Option<String>,
}
