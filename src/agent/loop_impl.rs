//! Agent - chat history, completion request and the execution loop

use tracing::{debug, info, warn};

use crate::capability::CapabilityRegistry;
use crate::error::Error;
use crate::Result;

use super::context::AgentContext;
use super::definition::AgentDefinition;
use super::history::ChatHistory;
use super::input::{AgentInput, AgentInputs};
use super::kind::AgentKind;
use super::llm::CompletionRequest;
use super::message::{Message, ToolCallRequest};

/// A running agent: one per conversation.
///
/// Owns the chat history and keeps a completion request in step with
/// it. For LLM-assisted agents `execute` sends that request, dispatches
/// any function calls the model makes to the agent's capabilities, and
/// repeats until the model answers with plain text.
pub struct Agent {
    definition: Box<dyn AgentDefinition>,
    ctx: AgentContext,
    capabilities: CapabilityRegistry,
    history: ChatHistory,
    completion_request: Option<CompletionRequest>,
}

impl Agent {
    /// Create an agent; its capabilities are fixed from here on
    pub fn new(definition: Box<dyn AgentDefinition>, ctx: AgentContext) -> Self {
        let capabilities = definition.capabilities(&ctx).into_iter().collect();

        Self {
            definition,
            ctx,
            capabilities,
            history: ChatHistory::Uninitialized,
            completion_request: None,
        }
    }

    pub fn name(&self) -> &str {
        self.definition.name()
    }

    pub fn kind(&self) -> AgentKind {
        self.definition.kind()
    }

    pub fn needed_inputs(&self) -> Vec<AgentInput> {
        self.definition.needed_inputs()
    }

    /// Hand the caller's inputs to the definition. Missing inputs read as empty.
    pub fn parse_needed_inputs(&mut self, inputs: &AgentInputs) {
        self.definition.parse_needed_inputs(inputs);
    }

    pub fn capabilities(&self) -> &CapabilityRegistry {
        &self.capabilities
    }

    pub fn history(&self) -> &ChatHistory {
        &self.history
    }

    /// Messages worth showing in a transcript
    pub fn chat_messages(&self) -> Vec<&Message> {
        self.history
            .messages()
            .iter()
            .filter(|m| m.is_displayable())
            .collect()
    }

    /// Pending request; `None` until the history is initialized or for
    /// agents that never talk to the model
    pub fn completion_request(&self) -> Option<&CompletionRequest> {
        self.completion_request.as_ref()
    }

    /// Replace the history wholesale
    pub fn set_history(&mut self, history: ChatHistory) {
        self.history = history;
        self.update_completion_request();
    }

    /// Seed the history with instructions and the agent's own initial prompt
    pub fn initialize(&mut self) {
        let first = Message::user(self.definition.initial_prompt());
        self.initialize_with(first);
    }

    /// Seed the history with instructions and the given first message
    pub fn initialize_with(&mut self, message: Message) {
        let system = Message::system(self.definition.instructions());
        self.set_history(ChatHistory::threaded(vec![system, message]));
    }

    /// Add a user turn. Only human-assisted agents accept one.
    pub fn add_user_chat(&mut self, input: impl Into<String>) -> Result<()> {
        if !self.kind().is_human_assisted() {
            return Err(Error::Unsupported(format!(
                "{} does not accept user chat",
                self.name()
            )));
        }

        if !self.history.is_initialized() {
            self.initialize();
        }
        self.push(Message::user(input));
        Ok(())
    }

    /// Run completions until the model replies with text; returns that text.
    ///
    /// A function name the agent does not expose fails the run with
    /// [`Error::UnknownCapability`]. Failures inside a known capability
    /// are handed back to the model as `Error: ...` results.
    pub async fn execute(&mut self) -> Result<String> {
        if !self.kind().is_llm_assisted() {
            return Err(Error::Unsupported(format!(
                "{} is not backed by a model",
                self.name()
            )));
        }

        if !self.history.is_initialized() {
            self.initialize();
        }

        info!("Running agent {} with {} messages", self.name(), self.history.len());

        for iteration in 0..self.ctx.max_iterations {
            debug!("Iteration {}/{}", iteration + 1, self.ctx.max_iterations);

            let response = {
                let request = self
                    .completion_request
                    .as_ref()
                    .ok_or_else(|| Error::Other("No completion request".to_string()))?;
                self.ctx.client.complete(request).await?
            };

            if !response.has_tool_calls() {
                let content = response.content.unwrap_or_default();
                info!("Agent {} replied: {} chars", self.name(), content.len());
                self.push(Message::assistant(content.clone()));
                return Ok(content);
            }

            // Every call must resolve before the turn enters history
            if let Some(unknown) = response
                .tool_calls
                .iter()
                .find(|call| !self.capabilities.has(&call.name))
            {
                warn!("Agent {} called unknown capability {}", self.name(), unknown.name);
                return Err(Error::UnknownCapability(unknown.name.clone()));
            }

            self.push(Message::assistant_with_tools(
                response.content.clone().unwrap_or_default(),
                response.tool_calls.clone(),
            ));

            for tool_call in &response.tool_calls {
                let result = self.run_capability(tool_call).await?;
                self.push(Message::tool_result(&tool_call.id, result));
            }
        }

        warn!("Agent {} hit {} iterations", self.name(), self.ctx.max_iterations);
        Err(Error::MaxIterations)
    }

    async fn run_capability(&self, tool_call: &ToolCallRequest) -> Result<String> {
        match self
            .capabilities
            .dispatch(&tool_call.name, tool_call.arguments.clone())
            .await
        {
            Ok(result) => {
                debug!("Capability {} succeeded: {} chars", tool_call.name, result.len());
                Ok(result)
            }
            Err(e) => {
                let error_msg = format!("Error: {}", e);
                debug!("Capability {} failed: {}", tool_call.name, error_msg);
                Ok(error_msg)
            }
        }
    }

    fn push(&mut self, message: Message) {
        self.history.push(message);
        self.update_completion_request();
    }

    fn update_completion_request(&mut self) {
        self.completion_request = if self.kind().is_llm_assisted() && self.history.is_initialized() {
            Some(CompletionRequest {
                model: self.ctx.model.clone(),
                messages: self.history.messages().to_vec(),
                tools: self.capabilities.definitions(),
            })
        } else {
            None
        };
    }
}
