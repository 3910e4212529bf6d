//! OpenAI chat completions client (also works with compatible endpoints).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;

use crate::capability::ToolDefinition;
use crate::error::Error;
use crate::Result;

use super::super::message::{Message, Role, ToolCallRequest};
use super::{ChatCompletionResponse, CompletionRequest, LlmClient, LlmResponse, Usage};

/// Default API base.
pub const OPENAI_API_BASE: &str = "https://api.openai.com";

/// Chat completions client using bearer token authentication.
#[derive(Clone)]
pub struct OpenAiClient {
    api_key: String,
    api_base: String,
    model: String,
    client: Client,
}

impl OpenAiClient {
    /// Create a new client for `api_base` (e.g. `https://api.openai.com`).
    pub fn new(api_key: &str, api_base: &str, model: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(600))
            .build()?;

        Ok(Self {
            api_key: api_key.to_string(),
            api_base: api_base.trim_end_matches('/').to_string(),
            model: model.to_string(),
            client,
        })
    }

    fn build_url(&self) -> String {
        format!("{}/v1/chat/completions", self.api_base)
    }

    fn convert_messages(&self, messages: &[Message]) -> Vec<Value> {
        messages
            .iter()
            .map(|m| match m.role {
                Role::Tool => json!({
                    "role": "tool",
                    "tool_call_id": m.tool_call_id.as_deref().unwrap_or_default(),
                    "content": m.content,
                }),
                Role::Assistant if m.tool_calls.as_ref().is_some_and(|c| !c.is_empty()) => {
                    let calls: Vec<Value> = m
                        .tool_calls
                        .iter()
                        .flatten()
                        .map(|tc| {
                            json!({
                                "id": tc.id,
                                "type": "function",
                                "function": {
                                    "name": tc.name,
                                    "arguments": tc.arguments.to_string(),
                                }
                            })
                        })
                        .collect();

                    let content = if m.content.is_empty() {
                        Value::Null
                    } else {
                        Value::String(m.content.clone())
                    };

                    json!({
                        "role": "assistant",
                        "content": content,
                        "tool_calls": calls,
                    })
                }
                role => json!({
                    "role": role.as_str(),
                    "content": m.content,
                }),
            })
            .collect()
    }

    fn convert_tools(&self, tools: &[ToolDefinition]) -> Option<Value> {
        if tools.is_empty() {
            return None;
        }

        let specs: Vec<Value> = tools
            .iter()
            .map(|t| {
                json!({
                    "type": "function",
                    "function": {
                        "name": t.name,
                        "description": t.description,
                        "parameters": t.parameters,
                    }
                })
            })
            .collect();

        Some(Value::Array(specs))
    }

    fn build_payload(&self, request: &CompletionRequest) -> Value {
        let model = if request.model.is_empty() {
            &self.model
        } else {
            &request.model
        };

        let mut payload = json!({
            "model": model,
            "messages": self.convert_messages(&request.messages),
        });

        if let Some(tools) = self.convert_tools(&request.tools) {
            payload["tools"] = tools;
        }

        payload
    }

    fn parse_response(&self, response: ChatCompletionResponse) -> Result<LlmResponse> {
        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| Error::Llm("No choices in response".to_string()))?;

        let mut tool_calls = Vec::new();
        for call in choice.message.tool_calls.unwrap_or_default() {
            let arguments = if call.function.arguments.trim().is_empty() {
                json!({})
            } else {
                serde_json::from_str(&call.function.arguments).map_err(|e| {
                    Error::Llm(format!(
                        "Invalid arguments for {}: {}",
                        call.function.name, e
                    ))
                })?
            };

            tool_calls.push(ToolCallRequest {
                id: call.id,
                name: call.function.name,
                arguments,
            });
        }

        let usage = response
            .usage
            .map(|u| {
                let prompt_tokens = u.prompt_tokens.unwrap_or(0);
                let completion_tokens = u.completion_tokens.unwrap_or(0);
                Usage {
                    prompt_tokens,
                    completion_tokens,
                    total_tokens: u.total_tokens.unwrap_or(prompt_tokens + completion_tokens),
                }
            })
            .unwrap_or_default();

        Ok(LlmResponse {
            content: choice.message.content.filter(|c| !c.is_empty()),
            tool_calls,
            finish_reason: choice.finish_reason.unwrap_or_else(|| "stop".to_string()),
            usage,
        })
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<LlmResponse> {
        let payload = self.build_payload(request);
        debug!(
            "Requesting completion: {} messages, {} tools",
            request.messages.len(),
            request.tools.len()
        );

        let response = self
            .client
            .post(self.build_url())
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(Error::Llm(format!("Chat API error {status}: {error_text}")));
        }

        let completion: ChatCompletionResponse = response.json().await?;
        self.parse_response(completion)
    }

    fn default_model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request_with_tool() -> CompletionRequest {
        CompletionRequest {
            model: "gpt-test".to_string(),
            messages: vec![Message::system("be brief"), Message::user("which agents?")],
            tools: vec![ToolDefinition {
                name: "getAgents".to_string(),
                description: "Returns a list of available LLM Agents.".to_string(),
                parameters: json!({"type": "object", "properties": {}, "required": []}),
            }],
        }
    }

    async fn client_for(server: &MockServer) -> OpenAiClient {
        OpenAiClient::new("test_api_key", &server.uri(), "gpt-test").unwrap()
    }

    #[tokio::test]
    async fn test_complete_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("authorization", "Bearer test_api_key"))
            .and(body_partial_json(json!({"model": "gpt-test"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{
                    "index": 0,
                    "message": {"role": "assistant", "content": "Hello!", "tool_calls": null},
                    "finish_reason": "stop"
                }],
                "usage": {"prompt_tokens": 12, "completion_tokens": 3, "total_tokens": 15}
            })))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let response = client.complete(&request_with_tool()).await.unwrap();

        assert_eq!(response.content.as_deref(), Some("Hello!"));
        assert!(!response.has_tool_calls());
        assert_eq!(response.usage.total_tokens, 15);
    }

    #[tokio::test]
    async fn test_complete_tool_call() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{
                    "message": {
                        "role": "assistant",
                        "content": null,
                        "tool_calls": [{
                            "id": "call_abc",
                            "type": "function",
                            "function": {
                                "name": "promptAgent",
                                "arguments": "{\"agent\":\"Clean JSON\",\"prompt\":\"{a:1}\"}"
                            }
                        }]
                    },
                    "finish_reason": "tool_calls"
                }]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let response = client.complete(&request_with_tool()).await.unwrap();

        assert_eq!(response.content, None);
        assert_eq!(response.finish_reason, "tool_calls");
        assert_eq!(response.tool_calls.len(), 1);
        assert_eq!(response.tool_calls[0].id, "call_abc");
        assert_eq!(response.tool_calls[0].arguments["agent"], "Clean JSON");
    }

    #[tokio::test]
    async fn test_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("bad key"))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.complete(&request_with_tool()).await.unwrap_err();

        assert!(matches!(&err, Error::Llm(msg) if msg.contains("401") && msg.contains("bad key")));
    }

    #[test]
    fn test_convert_tool_traffic() {
        let client = OpenAiClient::new("k", OPENAI_API_BASE, "gpt-test").unwrap();
        let call = ToolCallRequest {
            id: "call_1".to_string(),
            name: "getAgents".to_string(),
            arguments: json!({}),
        };

        let converted = client.convert_messages(&[
            Message::assistant_with_tools("", vec![call]),
            Message::tool_result("call_1", "Clean JSON, Financial"),
        ]);

        assert_eq!(converted[0]["content"], Value::Null);
        assert_eq!(converted[0]["tool_calls"][0]["function"]["arguments"], "{}");
        assert_eq!(converted[1]["role"], "tool");
        assert_eq!(converted[1]["tool_call_id"], "call_1");
    }

    #[test]
    fn test_payload_without_tools() {
        let client = OpenAiClient::new("k", OPENAI_API_BASE, "gpt-test").unwrap();
        let payload = client.build_payload(&CompletionRequest {
            model: String::new(),
            messages: vec![Message::user("hi")],
            tools: vec![],
        });

        assert_eq!(payload["model"], "gpt-test");
        assert!(payload.get("tools").is_none());
    }
}
