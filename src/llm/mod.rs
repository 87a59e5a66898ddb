//! Completion client layer.
//!
//! Defines the chat message types, the [`CompletionClient`] trait that
//! agents depend on, and the reqwest-backed [`OpenAiService`] that talks to
//! an OpenAI-compatible chat endpoint.

mod openai;

pub use openai::OpenAiService;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::error::Result;

/// Message role in a chat-completion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Completion response, wrapped without parsing.
///
/// `raw` holds the upstream response body verbatim. Interpreting it is the
/// caller's concern; the client only guarantees the request succeeded at the
/// HTTP level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredResponse {
    pub raw: String,
}

/// Client for a chat-completion endpoint.
///
/// Implementations must be safe for concurrent use; agents share one client
/// behind an `Arc` and issue independent calls through it.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send `prompt` as a user message and return the raw response body.
    ///
    /// Returns [`AgentError::Cancelled`](crate::error::AgentError::Cancelled)
    /// if `cancel` fires before the call completes.
    async fn get_structured_response(
        &self,
        prompt: &str,
        cancel: &CancellationToken,
    ) -> Result<StructuredResponse>;
}
