//! Error types shared by the agent and completion layers.

use thiserror::Error;

/// Errors produced while executing an agent or calling the completion
/// endpoint.
///
/// Every variant except [`AgentError::Cancelled`] is converted into a
/// failure [`ExecutionResult`](crate::agents::ExecutionResult) at the agent
/// boundary; `Cancelled` crosses it as an `Err` so callers can tell a
/// cancelled call apart from a failed one.
#[derive(Debug, Error)]
pub enum AgentError {
    /// The task description was empty or otherwise unusable. Detected
    /// before any network call.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The completion endpoint answered with a non-success status.
    #[error("upstream error: status {status}: {body}")]
    Upstream { status: u16, body: String },

    /// The HTTP call itself failed (connection refused, DNS failure,
    /// timeout).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The operation was cancelled before it completed.
    #[error("operation cancelled")]
    Cancelled,

    /// The response body does not match the requested structured shape.
    /// Only raised by agents that validate responses.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

pub type Result<T> = std::result::Result<T, AgentError>;
