// src/config.rs
use std::net::SocketAddr;

use thiserror::Error;

pub const DEFAULT_FRONTEND_URL: &str = "http://localhost:5173";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Value shipped in the sample `.env`; treated the same as a missing key.
pub const PLACEHOLDER_API_KEY: &str = "your_api_key_here";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY not configured")]
    MissingApiKey,

    #[error("GEMINI_API_KEY still holds the placeholder value")]
    PlaceholderApiKey,

    #[error("PORT must be a number between 0 and 65535, got {0:?}")]
    InvalidPort(String),

    #[error("invalid bind address {0:?}")]
    InvalidHost(String),

    #[error("FRONTEND_URL is not a valid origin: {0:?}")]
    InvalidFrontendUrl(String),
}

/// Process-wide settings, read once at startup.
#[derive(Clone)]
pub struct ServiceConfig {
    pub api_key: String,
    pub frontend_url: String,
    pub debug: bool,
    pub host: String,
    pub port: u16,
    pub model: String,
}

impl std::fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("api_key", &if self.api_key.is_empty() { "<unset>" } else { "<redacted>" })
            .field("frontend_url", &self.frontend_url)
            .field("debug", &self.debug)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("model", &self.model)
            .finish()
    }
}

impl ServiceConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup. Unset and blank values
    /// fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let port = match get("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            api_key: get("GEMINI_API_KEY").unwrap_or_default(),
            frontend_url: get("FRONTEND_URL").unwrap_or_else(|| DEFAULT_FRONTEND_URL.to_string()),
            debug: get("FLASK_DEBUG").map_or(true, |v| v.eq_ignore_ascii_case("true")),
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        })
    }

    /// The usable API key, or why there is none.
    pub fn api_key(&self) -> Result<&str, ConfigError> {
        match self.api_key.trim() {
            "" => Err(ConfigError::MissingApiKey),
            PLACEHOLDER_API_KEY => Err(ConfigError::PlaceholderApiKey),
            key => Ok(key),
        }
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidHost(self.host.clone()))
    }

    /// Default `EnvFilter` directive when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &'static str {
        if self.debug { "debug" } else { "info" }
    }
}
