//! Conversations - an agent plus the identity shown in the conversation list

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::agent::Agent;

/// A conversation between the user and one agent. Held in memory only.
pub struct Conversation {
    pub id: Uuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub agent: Agent,
}

impl Conversation {
    pub fn new(agent: Agent) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: agent.name().to_string(),
            created_at: Utc::now(),
            agent,
        }
    }

    /// One-line summary for conversation lists
    pub fn summary(&self) -> String {
        let preview = self
            .agent
            .history()
            .last_reply()
            .map(|m| first_line(&m.content))
            .unwrap_or_else(|| "(no replies yet)".to_string());

        format!(
            "{} · {} · {}",
            self.title,
            self.created_at.format("%Y-%m-%d %H:%M"),
            preview
        )
    }
}

fn first_line(text: &str) -> String {
    const MAX: usize = 60;
    let line = text.lines().next().unwrap_or_default();
    if line.chars().count() > MAX {
        format!("{}…", line.chars().take(MAX).collect::<String>())
    } else {
        line.to_string()
    }
}

/// Conversations of the current session, most recent last
#[derive(Default)]
pub struct ConversationList {
    conversations: Vec<Conversation>,
}

impl ConversationList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a conversation and return its index
    pub fn push(&mut self, conversation: Conversation) -> usize {
        self.conversations.push(conversation);
        self.conversations.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&Conversation> {
        self.conversations.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Conversation> {
        self.conversations.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Conversation> {
        self.conversations.iter()
    }

    pub fn len(&self) -> usize {
        self.conversations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::llm::FakeLlmClient;
    use crate::agent::{AgentContext, Message};
    use std::sync::Arc;

    fn conversation() -> Conversation {
        let ctx = AgentContext::test(Arc::new(FakeLlmClient::new(vec![])));
        Conversation::new(ctx.create_agent("Financial").unwrap())
    }

    #[test]
    fn test_summary_before_and_after_reply() {
        let mut convo = conversation();
        assert!(convo.summary().starts_with("Financial · "));
        assert!(convo.summary().ends_with("(no replies yet)"));

        let mut history = convo.agent.history().clone();
        history.push(Message::assistant("Your spending is up.\nDetails follow."));
        convo.agent.set_history(history);

        assert!(convo.summary().ends_with("Your spending is up."));
    }

    #[test]
    fn test_list_indices() {
        let mut list = ConversationList::new();
        assert_eq!(list.push(conversation()), 0);
        assert_eq!(list.push(conversation()), 1);
        assert_ne!(list.get(0).unwrap().id, list.get(1).unwrap().id);
    }

    #[test]
    fn test_long_preview_truncated() {
        let line = "x".repeat(100);
        let preview = first_line(&line);
        assert_eq!(preview.chars().count(), 61);
    }
}
