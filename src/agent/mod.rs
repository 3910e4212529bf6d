//! Agent module - core agent logic.
//!
//! This module contains:
//! - Agent kinds and the [`AgentDefinition`] trait bundled agents implement
//! - Message and chat history types
//! - LLM client trait and implementations
//! - [`Agent`], which runs completions and dispatches capability calls
//! - [`AgentRegistry`] and the bundled agents
//!
//! # Adding a New LLM Provider
//!
//! See [`llm::ProviderRegistry`] for instructions.

mod context;
mod definition;
mod history;
mod input;
mod kind;
mod loop_impl;
mod message;
mod registry;

pub mod bundled;
pub mod llm;

// Re-exports for convenience
pub use context::AgentContext;
pub use definition::{with_base_instructions, AgentDefinition, BASE_INSTRUCTIONS};
pub use history::ChatHistory;
pub use input::{signature, AgentInput, AgentInputs};
pub use kind::AgentKind;
pub use llm::{CompletionRequest, LlmClient, LlmResponse, OpenAiClient, ProviderRegistry, Usage};
pub use loop_impl::Agent;
pub use message::{Message, Role, ToolCallRequest};
pub use registry::AgentRegistry;
