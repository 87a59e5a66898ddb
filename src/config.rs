//! Configuration management for the completion endpoint.
//!
//! Configuration can be set via environment variables:
//! - `COMPLETION_BASE_URL` - Required. Base URL of the OpenAI-compatible endpoint.
//! - `COMPLETION_API_KEY` - Optional. Bearer token attached to every request.
//! - `COMPLETION_TIMEOUT_SECS` - Optional. Per-request timeout in seconds. Defaults to `60`.

use std::time::Duration;

use thiserror::Error;

/// Default per-request timeout when `COMPLETION_TIMEOUT_SECS` is unset.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Completion endpoint configuration.
///
/// Construction of the HTTP transport itself (proxies, TLS, connection
/// pooling) stays with the caller; this only carries what the service needs
/// to address and authorize a request.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the chat-completion endpoint (no trailing path)
    pub base_url: String,

    /// Bearer token for the `Authorization` header, if the endpoint needs one
    pub api_key: Option<String>,

    /// Timeout applied to each outbound request
    pub timeout: Duration,
}

impl Config {
    /// Create a configuration for the given endpoint with the default
    /// timeout and no credentials.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Attach a bearer token.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = std::env::var("COMPLETION_BASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("COMPLETION_BASE_URL".to_string()))?;

        let api_key = std::env::var("COMPLETION_API_KEY").ok();

        let timeout = match std::env::var("COMPLETION_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs: u64 = raw.parse().map_err(|_| {
                    ConfigError::InvalidValue("COMPLETION_TIMEOUT_SECS".to_string(), raw.clone())
                })?;
                Duration::from_secs(secs)
            }
            Err(_) => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            base_url,
            api_key,
            timeout,
        })
    }
}
