//! Sample research agent.
//!
//! The simplest useful agent: one prompt in, one wrapped response out. Use
//! it as the template for writing your own agents.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio_util::sync::CancellationToken;

use crate::error::{AgentError, Result};
use crate::llm::CompletionClient;

use super::{Agent, ExecutionContext, ExecutionResult};

/// Fields the prompt asks the model to include in its answer.
const EXPECTED_FIELDS: [&str; 4] = ["summary", "key_points", "risks", "recommended_next_actions"];

/// Agent that answers research tasks with a structured summary.
///
/// Builds a single prompt from the task description, delegates to the
/// completion client, and wraps the raw response as the result payload.
/// The structured shape is requested of the model by instruction; unless
/// constructed with [`ResearchAgent::with_validation`], the response is not
/// checked against it.
pub struct ResearchAgent {
    llm: Arc<dyn CompletionClient>,
    validate_response: bool,
}

impl ResearchAgent {
    pub fn new(llm: Arc<dyn CompletionClient>) -> Self {
        Self {
            llm,
            validate_response: false,
        }
    }

    /// Create an agent that also validates the response body: it must parse
    /// as a JSON object carrying all four requested fields, otherwise the
    /// invocation fails with a malformed-response message.
    pub fn with_validation(llm: Arc<dyn CompletionClient>) -> Self {
        Self {
            llm,
            validate_response: true,
        }
    }

    fn build_prompt(task_description: &str) -> String {
        format!(
            "You are an enterprise research agent.\n\
             Task: {}\n\n\
             Provide a structured JSON response with:\n\
             - summary\n\
             - key_points\n\
             - risks\n\
             - recommended_next_actions",
            task_description
        )
    }

    fn check_structure(raw: &str) -> Result<()> {
        let value: Value = serde_json::from_str(raw).map_err(|e| {
            AgentError::MalformedResponse(format!("response is not valid JSON: {}", e))
        })?;

        let object = value
            .as_object()
            .ok_or_else(|| AgentError::MalformedResponse("response is not a JSON object".into()))?;

        for field in EXPECTED_FIELDS {
            if !object.contains_key(field) {
                return Err(AgentError::MalformedResponse(format!(
                    "missing field: {}",
                    field
                )));
            }
        }

        Ok(())
    }

    async fn run(
        &self,
        context: &ExecutionContext,
        cancel: &CancellationToken,
    ) -> Result<ExecutionResult> {
        let task = context.task_description().trim();
        if task.is_empty() {
            return Err(AgentError::InvalidInput("task description is empty".into()));
        }

        let prompt = Self::build_prompt(task);
        tracing::debug!(agent = self.name(), "Sending research prompt");

        let response = self.llm.get_structured_response(&prompt, cancel).await?;

        if self.validate_response {
            Self::check_structure(&response.raw)?;
        }

        Ok(ExecutionResult::ok(
            Some(json!({ "raw": response.raw })),
            Some("Research completed."),
        ))
    }
}

#[async_trait]
impl Agent for ResearchAgent {
    fn name(&self) -> &str {
        "ResearchAgent"
    }

    async fn execute(
        &self,
        context: &ExecutionContext,
        cancel: &CancellationToken,
    ) -> Result<ExecutionResult> {
        match self.run(context, cancel).await {
            Ok(result) => Ok(result),
            Err(AgentError::Cancelled) => Err(AgentError::Cancelled),
            Err(e) => {
                tracing::warn!(agent = self.name(), error = %e, "Task failed");
                Ok(ExecutionResult::fail(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::llm::StructuredResponse;

    use super::*;

    /// Stub that returns a fixed body.
    struct FixedClient {
        raw: &'static str,
    }

    #[async_trait]
    impl CompletionClient for FixedClient {
        async fn get_structured_response(
            &self,
            _prompt: &str,
            _cancel: &CancellationToken,
        ) -> Result<StructuredResponse> {
            Ok(StructuredResponse {
                raw: self.raw.to_string(),
            })
        }
    }

    /// Stub that fails every call.
    struct FailingClient;

    #[async_trait]
    impl CompletionClient for FailingClient {
        async fn get_structured_response(
            &self,
            _prompt: &str,
            _cancel: &CancellationToken,
        ) -> Result<StructuredResponse> {
            Err(AgentError::Upstream {
                status: 500,
                body: "server error".to_string(),
            })
        }
    }

    /// Stub that completes only by cancellation, like a hung request.
    struct PendingClient;

    #[async_trait]
    impl CompletionClient for PendingClient {
        async fn get_structured_response(
            &self,
            _prompt: &str,
            cancel: &CancellationToken,
        ) -> Result<StructuredResponse> {
            cancel.cancelled().await;
            Err(AgentError::Cancelled)
        }
    }

    /// Stub that must never be reached.
    struct UnreachableClient;

    #[async_trait]
    impl CompletionClient for UnreachableClient {
        async fn get_structured_response(
            &self,
            _prompt: &str,
            _cancel: &CancellationToken,
        ) -> Result<StructuredResponse> {
            panic!("completion client should not be called");
        }
    }

    #[tokio::test]
    async fn wraps_stubbed_response_as_payload() {
        let agent = ResearchAgent::new(Arc::new(FixedClient {
            raw: r#"{"summary":"ok"}"#,
        }));
        let context = ExecutionContext::new("Summarize Q1 risks");

        let result = agent
            .execute(&context, &CancellationToken::new())
            .await
            .expect("not cancelled");

        assert!(result.success());
        assert_eq!(result.message(), Some("Research completed."));
        assert_eq!(result.payload(), Some(&json!({"raw": "{\"summary\":\"ok\"}"})));
    }

    #[tokio::test]
    async fn empty_task_fails_before_any_call() {
        let agent = ResearchAgent::new(Arc::new(UnreachableClient));
        let context = ExecutionContext::new("   ");

        let result = agent
            .execute(&context, &CancellationToken::new())
            .await
            .expect("not cancelled");

        assert!(!result.success());
        assert!(result.message().unwrap().contains("invalid input"));
        assert!(result.payload().is_none());
    }

    #[tokio::test]
    async fn dependency_failure_becomes_a_failure_result() {
        let agent = ResearchAgent::new(Arc::new(FailingClient));
        let context = ExecutionContext::new("Summarize Q1 risks");

        let result = agent
            .execute(&context, &CancellationToken::new())
            .await
            .expect("not cancelled");

        assert!(!result.success());
        assert!(!result.message().unwrap().is_empty());
        assert!(result.payload().is_none());
    }

    #[tokio::test]
    async fn cancellation_is_not_reported_as_a_result() {
        let agent = ResearchAgent::new(Arc::new(PendingClient));
        let context = ExecutionContext::new("Summarize Q1 risks");

        let cancel = CancellationToken::new();
        cancel.cancel();

        let result = agent.execute(&context, &cancel).await;
        assert!(matches!(result, Err(AgentError::Cancelled)));
    }

    #[tokio::test]
    async fn validation_rejects_incomplete_responses() {
        let agent = ResearchAgent::with_validation(Arc::new(FixedClient {
            raw: r#"{"summary":"ok"}"#,
        }));
        let context = ExecutionContext::new("Summarize Q1 risks");

        let result = agent
            .execute(&context, &CancellationToken::new())
            .await
            .expect("not cancelled");

        assert!(!result.success());
        assert!(result.message().unwrap().contains("malformed response"));
    }

    #[tokio::test]
    async fn validation_accepts_the_requested_shape() {
        let agent = ResearchAgent::with_validation(Arc::new(FixedClient {
            raw: r#"{"summary":"s","key_points":[],"risks":[],"recommended_next_actions":[]}"#,
        }));
        let context = ExecutionContext::new("Summarize Q1 risks");

        let result = agent
            .execute(&context, &CancellationToken::new())
            .await
            .expect("not cancelled");

        assert!(result.success());
    }

    #[test]
    fn prompt_names_the_task_and_requested_fields() {
        let prompt = ResearchAgent::build_prompt("X");
        assert!(prompt.contains("Task: X"));
        for field in EXPECTED_FIELDS {
            assert!(prompt.contains(field), "prompt should mention {}", field);
        }
    }
}
