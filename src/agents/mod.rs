//! Agent contract and invocation types.
//!
//! An agent is a named, stateless unit of work: it accepts an execution
//! context describing a task and produces a success/failure result, usually
//! by delegating to the completion client. Dependencies are injected at
//! construction; one instance can serve concurrent invocations.

mod research;

pub use research::ResearchAgent;

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use crate::error::Result;

/// Immutable input for one agent invocation.
#[derive(Debug, Clone)]
pub struct ExecutionContext {
    task_description: String,
    metadata: HashMap<String, Value>,
}

impl ExecutionContext {
    /// Create a context for the given task.
    pub fn new(task_description: impl Into<String>) -> Self {
        Self {
            task_description: task_description.into(),
            metadata: HashMap::new(),
        }
    }

    /// Attach caller-supplied metadata. The core never interprets it;
    /// concrete agents may.
    pub fn with_metadata(mut self, metadata: HashMap<String, Value>) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn task_description(&self) -> &str {
        &self.task_description
    }

    pub fn metadata(&self) -> &HashMap<String, Value> {
        &self.metadata
    }
}

/// Immutable outcome of one agent invocation.
///
/// Built only through [`ExecutionResult::ok`] and [`ExecutionResult::fail`],
/// which keep the invariant that a failure never carries a payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionResult {
    success: bool,
    message: Option<String>,
    payload: Option<Value>,
}

impl ExecutionResult {
    /// Successful result with an optional payload and message.
    pub fn ok(payload: Option<Value>, message: Option<&str>) -> Self {
        Self {
            success: true,
            message: message.map(str::to_string),
            payload,
        }
    }

    /// Failed result. The message is required; a failure has no payload.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            payload: None,
        }
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn payload(&self) -> Option<&Value> {
        self.payload.as_ref()
    }
}

/// A named, stateless unit of work.
#[async_trait]
pub trait Agent: Send + Sync {
    /// Stable identity of this agent.
    fn name(&self) -> &str;

    /// Execute one task.
    ///
    /// Dependency failures are converted into a failure result at this
    /// boundary; the only error an implementation is expected to return is
    /// [`AgentError::Cancelled`](crate::error::AgentError::Cancelled), when
    /// `cancel` fires before the call completes.
    async fn execute(
        &self,
        context: &ExecutionContext,
        cancel: &CancellationToken,
    ) -> Result<ExecutionResult>;
}
