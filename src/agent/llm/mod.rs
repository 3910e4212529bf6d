//! LLM client abstraction layer.
//!
//! This module provides:
//! - [`CompletionRequest`] built by agents from their chat history
//! - [`LlmClient`] trait for swappable LLM providers
//! - [`ProviderRegistry`] for dynamic provider creation
//! - [`OpenAiClient`] for OpenAI-compatible chat completions
//!
//! # Adding a New Provider
//!
//! 1. Create a new file (e.g., `ollama.rs`)
//! 2. Implement `LlmClient` trait
//! 3. Add to `ProviderRegistry::create()`
//! 4. Add config fields in `config.rs`

mod types;

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::capability::ToolDefinition;
use crate::config::Config;
use crate::error::Error;
use crate::Result;

pub use types::*;

pub mod openai;

pub use openai::OpenAiClient;

use super::message::{Message, ToolCallRequest};

/// A chat completion request, rebuilt whenever an agent's history changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub tools: Vec<ToolDefinition>,
}

/// Response from an LLM provider.
#[derive(Debug, Clone)]
pub struct LlmResponse {
    /// Text content of the response.
    pub content: Option<String>,

    /// Tool calls requested by the LLM.
    pub tool_calls: Vec<ToolCallRequest>,

    /// Reason the response finished.
    pub finish_reason: String,

    /// Token usage statistics.
    pub usage: Usage,
}

impl LlmResponse {
    /// Create a simple text response.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            tool_calls: vec![],
            finish_reason: "stop".to_string(),
            usage: Usage::default(),
        }
    }

    /// Create a response that only requests tool calls.
    pub fn tool_calls(tool_calls: Vec<ToolCallRequest>) -> Self {
        Self {
            content: None,
            tool_calls,
            finish_reason: "tool_calls".to_string(),
            usage: Usage::default(),
        }
    }

    /// Check if response has tool calls.
    #[inline]
    pub fn has_tool_calls(&self) -> bool {
        !self.tool_calls.is_empty()
    }
}

/// Token usage information.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: usize,
    pub completion_tokens: usize,
    pub total_tokens: usize,
}

/// LLM client trait - swappable provider abstraction.
///
/// Implement this trait to add a new LLM provider.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send a completion request and get the response.
    async fn complete(&self, request: &CompletionRequest) -> Result<LlmResponse>;

    /// Get the default model for this provider.
    fn default_model(&self) -> &str;
}

/// Provider registry - creates LLM clients dynamically.
///
/// # Example
///
/// ```ignore
/// let client = ProviderRegistry::create(&config)?;
/// let response = client.complete(&request).await?;
/// ```
pub struct ProviderRegistry;

impl ProviderRegistry {
    /// Create an LLM client from configuration.
    ///
    /// Supported providers:
    /// - `"openai"`: OpenAI chat completions (or any compatible `api_base`)
    pub fn create(config: &Config) -> Result<Arc<dyn LlmClient>> {
        match config.provider.as_str() {
            "openai" => {
                let api_key = config.resolved_api_key();
                if api_key.is_empty() {
                    return Err(Error::Config(
                        "No API key set. Run 'kore onboard' or export OPENAI_API_KEY.".to_string(),
                    ));
                }
                let client = OpenAiClient::new(&api_key, &config.api_base, &config.model)?;
                Ok(Arc::new(client))
            }
            other => Err(Error::Config(format!("Unknown provider: {other}"))),
        }
    }

    /// List available provider names.
    pub fn available() -> &'static [&'static str] {
        &["openai"]
    }
}

/// Fake LLM client for testing.
#[cfg(test)]
pub struct FakeLlmClient {
    responses: std::sync::Mutex<std::collections::VecDeque<LlmResponse>>,
    requests: std::sync::Mutex<Vec<CompletionRequest>>,
}

#[cfg(test)]
impl FakeLlmClient {
    /// Create with predefined text responses.
    pub fn new(responses: Vec<&str>) -> Self {
        Self::scripted(responses.iter().map(|s| LlmResponse::text(*s)).collect())
    }

    /// Create with an arbitrary sequence of responses.
    pub fn scripted(responses: Vec<LlmResponse>) -> Self {
        Self {
            responses: std::sync::Mutex::new(responses.into()),
            requests: std::sync::Mutex::new(Vec::new()),
        }
    }

    /// Create with a single tool call followed by a text response.
    pub fn with_tool_call(name: &str, args: serde_json::Value, final_response: &str) -> Self {
        let tool_response = LlmResponse::tool_calls(vec![ToolCallRequest {
            id: "tc_1".to_string(),
            name: name.to_string(),
            arguments: args,
        }]);

        Self::scripted(vec![tool_response, LlmResponse::text(final_response)])
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[cfg(test)]
#[async_trait]
impl LlmClient for FakeLlmClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<LlmResponse> {
        self.requests.lock().unwrap().push(request.clone());
        let mut responses = self.responses.lock().unwrap();
        responses
            .pop_front()
            .ok_or_else(|| Error::Llm("No more fake responses".to_string()))
    }

    fn default_model(&self) -> &str {
        "fake-model"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CompletionRequest {
        CompletionRequest {
            model: "fake-model".to_string(),
            messages: vec![Message::user("hi")],
            tools: vec![],
        }
    }

    #[tokio::test]
    async fn test_fake_llm_client() {
        let client = FakeLlmClient::new(vec!["Hello!", "World!"]);

        let resp1 = client.complete(&request()).await.unwrap();
        assert_eq!(resp1.content.as_deref(), Some("Hello!"));

        let resp2 = client.complete(&request()).await.unwrap();
        assert_eq!(resp2.content.as_deref(), Some("World!"));

        assert!(client.complete(&request()).await.is_err());
        assert_eq!(client.requests().len(), 3);
    }

    #[test]
    fn test_registry_rejects_unknown_provider() {
        let config = Config {
            provider: "carrier-pigeon".to_string(),
            api_key: "sk-test".to_string(),
            ..Config::default()
        };
        assert!(matches!(ProviderRegistry::create(&config), Err(Error::Config(_))));
    }

    #[test]
    fn test_registry_creates_openai() {
        let config = Config {
            api_key: "sk-test".to_string(),
            ..Config::default()
        };
        let client = ProviderRegistry::create(&config).unwrap();
        assert_eq!(client.default_model(), config.model);
    }
}
