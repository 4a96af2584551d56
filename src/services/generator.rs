// src/services/generator.rs
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use super::fallback::{FALLBACK_RESPONSES, pick};
use super::gemini::GeminiClient;
use super::{TextGenerator, UpstreamError};
use crate::config::{ConfigError, ServiceConfig};

/// Courtesy delay before every upstream call.
pub const DEFAULT_PACING: Duration = Duration::from_millis(500);

pub const PERSONA_PROMPT: &str = "You are MentiSphere AI, a compassionate mental health support chatbot specifically designed for students.

Your role:
- Provide empathetic, supportive responses to students' mental health concerns
- Offer practical coping strategies and techniques
- Be understanding of academic stress, social pressures, and student life challenges
- Always encourage professional help when needed
- Keep responses warm, non-judgmental, and encouraging
- Limit responses to 2-3 sentences to keep them concise and focused

Guidelines:
- Never provide medical advice or diagnose conditions
- Always validate the user's feelings
- Suggest healthy coping mechanisms when appropriate
- Be encouraging but realistic
- If someone expresses serious mental health crisis, gently suggest professional help

Remember: You're a supportive companion, not a replacement for professional therapy.";

#[derive(Debug, Error)]
pub enum InitError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Outcome of one generation attempt.
#[derive(Debug)]
pub enum Reply {
    Generated(String),
    Fallback { text: &'static str, reason: UpstreamError },
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Reply::Generated(text) => text.as_str(),
            Reply::Fallback { text, .. } => *text,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Reply::Fallback { .. })
    }
}

#[derive(Clone)]
pub struct ResponseGenerator {
    backend: Arc<dyn TextGenerator>,
    pacing: Duration,
}

impl std::fmt::Debug for ResponseGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseGenerator")
            .field("pacing", &self.pacing)
            .finish()
    }
}

impl ResponseGenerator {
    pub fn new(backend: Arc<dyn TextGenerator>) -> Self {
        Self { backend, pacing: DEFAULT_PACING }
    }

    /// Gemini-backed generator. Fails when the key is missing or still the
    /// placeholder.
    pub fn from_config(config: &ServiceConfig) -> Result<Self, InitError> {
        let api_key = config.api_key()?;
        let client = GeminiClient::new(api_key, config.model.clone())?;
        tracing::info!(model = %client.model(), "Gemini service initialized");
        Ok(Self::new(Arc::new(client)))
    }

    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn pacing(&self) -> Duration {
        self.pacing
    }

    pub async fn get_response(&self, message: &str, emotion_context: Option<&str>) -> Reply {
        let prompt = build_prompt(message, emotion_context);

        if !self.pacing.is_zero() {
            tokio::time::sleep(self.pacing).await;
        }

        match self.backend.generate(&prompt).await {
            Ok(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    tracing::warn!("empty response from Gemini");
                    return fallback(UpstreamError::EmptyResponse);
                }
                tracing::info!(message_len = message.len(), "generated response for user message");
                Reply::Generated(trimmed.to_string())
            }
            Err(reason) => {
                tracing::error!(error = %reason, "error getting response from Gemini");
                fallback(reason)
            }
        }
    }
}

fn fallback(reason: UpstreamError) -> Reply {
    Reply::Fallback { text: pick(&FALLBACK_RESPONSES), reason }
}

pub fn build_prompt(message: &str, emotion_context: Option<&str>) -> String {
    let mut prompt = format!("{PERSONA_PROMPT}\n\n");
    if let Some(context) = emotion_context.map(str::trim).filter(|c| !c.is_empty()) {
        prompt.push_str(&format!("The student seems to be experiencing: {context}.\n\n"));
    }
    prompt.push_str(&format!("Student says: {message}\n\nYour supportive response:"));
    prompt
}
