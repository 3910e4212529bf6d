//! CLI adapter - interactive and single-message command line interface.
//!
//! Stands in for the conversation screens: pick an agent, fill in the
//! inputs it needs, chat with it, and move between conversations.

use std::io::{self, BufRead, Write};

use inquire::{Select, Text};
use tracing::debug;

use crate::agent::{AgentContext, AgentInput, AgentInputs};
use crate::conversation::{Conversation, ConversationList};
use crate::error::Error;
use crate::ui;
use crate::Result;

const HELP: &str = "Commands: /new (start a conversation), /list, /switch <n>, /agents, /help, exit";

/// CLI channel holding the session's conversations.
pub struct CliChannel {
    ctx: AgentContext,
    conversations: ConversationList,
    current: Option<usize>,
}

impl CliChannel {
    /// Create a new CLI channel.
    pub fn new(ctx: AgentContext) -> Self {
        Self {
            ctx,
            conversations: ConversationList::new(),
            current: None,
        }
    }

    /// Start a conversation with the named agent and make it current.
    pub fn start_conversation(&mut self, agent_name: &str, inputs: &AgentInputs) -> Result<usize> {
        let mut agent = self.ctx.create_agent(agent_name)?;
        agent.parse_needed_inputs(inputs);
        agent.initialize();

        let index = self.conversations.push(Conversation::new(agent));
        self.current = Some(index);
        debug!("Started conversation {} with {}", index, agent_name);
        Ok(index)
    }

    /// Let the current agent answer its initial prompt.
    pub async fn run_initial(&mut self) -> Result<String> {
        let conversation = self.current_mut()?;
        if !conversation.agent.kind().is_llm_assisted() {
            return Ok(String::new());
        }

        let pb = ui::spinner(&format!("{} is thinking", conversation.agent.name()));
        let result = conversation.agent.execute().await;
        pb.finish_and_clear();
        result
    }

    /// Send one user message to the current agent and return the reply.
    pub async fn run_once(&mut self, message: &str) -> Result<String> {
        let conversation = self.current_mut()?;
        conversation.agent.add_user_chat(message)?;

        if !conversation.agent.kind().is_llm_assisted() {
            return Ok(String::new());
        }

        let pb = ui::spinner(&format!("{} is thinking", conversation.agent.name()));
        let result = conversation.agent.execute().await;
        pb.finish_and_clear();
        result
    }

    /// Whether the current agent takes user messages
    pub fn accepts_chat(&self) -> bool {
        self.current
            .and_then(|i| self.conversations.get(i))
            .map(|c| c.agent.kind().is_human_assisted())
            .unwrap_or(false)
    }

    /// Run interactive REPL loop.
    pub async fn run_interactive(&mut self) -> Result<()> {
        if self.current.is_none() {
            self.new_conversation().await?;
        }
        println!("\n{}", HELP);

        let stdin = io::stdin();
        let mut stdout = io::stdout();

        loop {
            print!("\n> ");
            stdout.flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                // EOF
                break;
            }

            let input = line.trim();
            if input.is_empty() {
                continue;
            }

            if matches!(input.to_lowercase().as_str(), "exit" | "quit" | "q") {
                println!("Goodbye! 👋");
                break;
            }

            if let Some(command) = input.strip_prefix('/') {
                if let Err(e) = self.handle_command(command).await {
                    ui::print_error(&e.to_string());
                }
                continue;
            }

            if !self.accepts_chat() {
                self.warn_no_chat();
                continue;
            }

            match self.run_once(input).await {
                Ok(reply) => self.print_reply(&reply),
                Err(e) => ui::print_error(&e.to_string()),
            }
        }

        Ok(())
    }

    async fn handle_command(&mut self, command: &str) -> Result<()> {
        let mut parts = command.split_whitespace();
        match parts.next().unwrap_or_default() {
            "new" => self.new_conversation().await,
            "list" => {
                self.print_conversations();
                Ok(())
            }
            "switch" => {
                let index: usize = parts
                    .next()
                    .and_then(|n| n.parse().ok())
                    .ok_or_else(|| Error::InvalidArguments("Usage: /switch <n>".to_string()))?;
                self.switch_to(index)
            }
            "agents" => {
                for signature in self.ctx.agents.signatures() {
                    ui::print_step(&signature);
                }
                Ok(())
            }
            "help" => {
                println!("{}", HELP);
                Ok(())
            }
            other => Err(Error::InvalidArguments(format!("Unknown command /{}", other))),
        }
    }

    /// Pick an agent, collect its inputs, and let it answer its initial prompt.
    async fn new_conversation(&mut self) -> Result<()> {
        let names: Vec<String> = self.ctx.agents.names().iter().map(|s| s.to_string()).collect();
        let name = Select::new("Choose an agent:", names)
            .prompt()
            .map_err(|e| Error::Other(format!("Prompt failed: {}", e)))?;

        let needed = self
            .ctx
            .agents
            .needed_inputs(&name)
            .map(|inputs| inputs.to_vec())
            .unwrap_or_default();
        let inputs = prompt_inputs(&needed)?;

        self.start_conversation(&name, &inputs)?;
        let reply = self.run_initial().await?;
        self.print_reply(&reply);
        if !self.accepts_chat() {
            self.warn_no_chat();
        }
        Ok(())
    }

    /// Tell the user the current agent only answers its initial prompt
    pub fn warn_no_chat(&self) {
        if let Some(conversation) = self.current.and_then(|i| self.conversations.get(i)) {
            ui::print_warning(&no_chat_notice(conversation.agent.name()));
        }
    }

    fn switch_to(&mut self, index: usize) -> Result<()> {
        let conversation = self
            .conversations
            .get(index)
            .ok_or_else(|| Error::InvalidArguments(format!("No conversation {}", index)))?;

        ui::print_step(&format!("Switched to {}", conversation.title));
        for message in conversation.agent.chat_messages() {
            ui::print_message(conversation.agent.name(), message);
        }
        self.current = Some(index);
        Ok(())
    }

    fn print_conversations(&self) {
        if self.conversations.is_empty() {
            ui::print_step("No conversations yet");
            return;
        }
        for (i, conversation) in self.conversations.iter().enumerate() {
            let marker = if Some(i) == self.current { "*" } else { " " };
            println!("  {}{} {}", marker, i, conversation.summary());
        }
    }

    fn print_reply(&self, reply: &str) {
        if reply.is_empty() {
            return;
        }
        if let Some(conversation) = self.current.and_then(|i| self.conversations.get(i)) {
            println!("\n{}", conversation.agent.name());
        }
        println!("{}", reply);
    }

    fn current_mut(&mut self) -> Result<&mut Conversation> {
        self.current
            .and_then(|i| self.conversations.get_mut(i))
            .ok_or_else(|| Error::Other("No conversation selected".to_string()))
    }

    pub fn conversations(&self) -> &ConversationList {
        &self.conversations
    }
}

fn no_chat_notice(agent_name: &str) -> String {
    format!(
        "{} does not take messages. Use /new to start another conversation.",
        agent_name
    )
}

/// Ask for every needed input; list inputs are comma separated.
fn prompt_inputs(needed: &[AgentInput]) -> Result<AgentInputs> {
    let mut inputs = AgentInputs::new();
    for input in needed {
        let label = match input {
            AgentInput::StringArg { key, .. } => format!("{}:", key),
            AgentInput::ListArg { key, .. } => format!("{} (comma separated):", key),
        };
        let raw = Text::new(&label)
            .prompt()
            .map_err(|e| Error::Other(format!("Prompt failed: {}", e)))?;
        inputs.insert(input.with_raw_value(&raw));
    }
    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::llm::FakeLlmClient;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_start_and_chat() {
        let client = Arc::new(FakeLlmClient::new(vec!["What should the agent do?", "Got it."]));
        let mut cli = CliChannel::new(AgentContext::test(client));

        cli.start_conversation("Create Agent", &AgentInputs::new()).unwrap();
        assert_eq!(cli.run_initial().await.unwrap(), "What should the agent do?");
        assert_eq!(cli.run_once("plan trips").await.unwrap(), "Got it.");
        assert_eq!(cli.conversations().len(), 1);
    }

    #[tokio::test]
    async fn test_chat_without_conversation_fails() {
        let client = Arc::new(FakeLlmClient::new(vec![]));
        let mut cli = CliChannel::new(AgentContext::test(client));
        assert!(cli.run_once("hello").await.is_err());
    }

    #[tokio::test]
    async fn test_llm_only_agent_does_not_accept_chat() {
        let client = Arc::new(FakeLlmClient::new(vec!["{}"]));
        let mut cli = CliChannel::new(AgentContext::test(client));
        assert!(!cli.accepts_chat());

        cli.start_conversation("Clean JSON", &AgentInputs::new()).unwrap();
        assert!(!cli.accepts_chat());
        assert_eq!(cli.run_initial().await.unwrap(), "{}");
        assert!(matches!(cli.run_once("more").await, Err(Error::Unsupported(_))));

        cli.start_conversation("Create Agent", &AgentInputs::new()).unwrap();
        assert!(cli.accepts_chat());
    }

    #[test]
    fn test_no_chat_notice_names_agent() {
        assert!(no_chat_notice("Clean JSON").starts_with("Clean JSON does not take messages"));
    }

    #[test]
    fn test_unknown_agent_rejected() {
        let client = Arc::new(FakeLlmClient::new(vec![]));
        let mut cli = CliChannel::new(AgentContext::test(client));
        assert!(matches!(
            cli.start_conversation("Nobody", &AgentInputs::new()),
            Err(Error::UnknownAgent(_))
        ));
    }
}
