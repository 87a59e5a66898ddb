//! OpenAI-compatible completion service.

use async_trait::async_trait;
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::error::{AgentError, Result};

use super::{ChatMessage, CompletionClient, StructuredResponse};

/// System instruction sent with every completion request.
const SYSTEM_INSTRUCTION: &str = "You are a helpful enterprise research assistant.";

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    messages: &'a [ChatMessage],
}

/// Completion service for OpenAI-compatible chat endpoints.
///
/// Sends `POST {base_url}/openai/chat/completions` with a fixed system
/// instruction plus the caller's prompt, and returns the response body
/// without parsing it. Non-success statuses surface as
/// [`AgentError::Upstream`] rather than as a payload.
pub struct OpenAiService {
    http_client: reqwest::Client,
    config: Config,
}

impl OpenAiService {
    /// Create a service around an existing HTTP client.
    ///
    /// The client is a shared transport: build it once, clone it into every
    /// service that needs it (`reqwest::Client` clones are cheap handles).
    pub fn new(http_client: reqwest::Client, config: Config) -> Self {
        Self {
            http_client,
            config,
        }
    }

    /// Create a service with a default HTTP client.
    pub fn from_config(config: Config) -> Result<Self> {
        let http_client = reqwest::Client::builder().build()?;
        Ok(Self::new(http_client, config))
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/openai/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl CompletionClient for OpenAiService {
    async fn get_structured_response(
        &self,
        prompt: &str,
        cancel: &CancellationToken,
    ) -> Result<StructuredResponse> {
        let messages = [
            ChatMessage::system(SYSTEM_INSTRUCTION),
            ChatMessage::user(prompt),
        ];

        let url = self.completions_url();
        let mut request = self
            .http_client
            .post(&url)
            .json(&CompletionRequest {
                messages: &messages,
            })
            .timeout(self.config.timeout);

        if let Some(api_key) = &self.config.api_key {
            request = request.header("Authorization", format!("Bearer {}", api_key));
        }

        tracing::debug!(url = %url, "Sending completion request");

        let response = tokio::select! {
            _ = cancel.cancelled() => return Err(AgentError::Cancelled),
            response = request.send() => response?,
        };

        let status = response.status();
        let body = tokio::select! {
            _ = cancel.cancelled() => return Err(AgentError::Cancelled),
            body = response.text() => body?,
        };

        if !status.is_success() {
            tracing::warn!(
                status = status.as_u16(),
                "Completion endpoint returned an error"
            );
            return Err(AgentError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        Ok(StructuredResponse { raw: body })
    }
}
