//! Wire types for chat completion responses.

use serde::Deserialize;

/// Top-level chat completion response.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
    pub usage: Option<UsageBlock>,
}

/// A single response choice.
#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
    pub finish_reason: Option<String>,
}

/// Message returned by the model.
#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    pub content: Option<String>,
    #[serde(default)]
    pub tool_calls: Option<Vec<ToolCallBlock>>,
}

/// Function call requested by the model.
#[derive(Debug, Deserialize)]
pub struct ToolCallBlock {
    pub id: String,
    pub function: FunctionBlock,
}

/// Function name and its JSON-encoded arguments.
#[derive(Debug, Deserialize)]
pub struct FunctionBlock {
    pub name: String,
    #[serde(default)]
    pub arguments: String,
}

/// Token usage.
#[derive(Debug, Deserialize)]
pub struct UsageBlock {
    pub prompt_tokens: Option<usize>,
    pub completion_tokens: Option<usize>,
    pub total_tokens: Option<usize>,
}
