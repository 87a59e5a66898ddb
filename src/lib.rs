//! # Agent Kit
//!
//! A minimal starter kit for building LLM-backed agents.
//!
//! This library provides:
//! - An agent contract: a named, stateless unit of work that turns a task
//!   description into a structured success/failure result
//! - A sample research agent that asks the model for a structured summary
//! - A completion client for OpenAI-compatible chat endpoints
//!
//! ## Architecture
//!
//! A caller constructs an agent with its dependencies, then awaits one call:
//! 1. Build an [`ExecutionContext`] with the task description
//! 2. Call [`Agent::execute`] with a cancellation token
//! 3. The agent delegates to the [`CompletionClient`] and wraps the raw
//!    response as the result payload
//!
//! There is no scheduler, no persistence, and no shared mutable state;
//! concurrent invocations share only the HTTP transport.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use agent_kit::{Agent, Config, ExecutionContext, OpenAiService, ResearchAgent};
//! use tokio_util::sync::CancellationToken;
//!
//! let config = Config::from_env()?;
//! let service = Arc::new(OpenAiService::from_config(config)?);
//! let agent = ResearchAgent::new(service);
//!
//! let context = ExecutionContext::new("Summarize Q1 risks");
//! let result = agent.execute(&context, &CancellationToken::new()).await?;
//! ```

pub mod agents;
pub mod config;
pub mod error;
pub mod llm;
pub mod logging;

pub use agents::{Agent, ExecutionContext, ExecutionResult, ResearchAgent};
pub use config::Config;
pub use error::{AgentError, Result};
pub use llm::{CompletionClient, OpenAiService, StructuredResponse};
