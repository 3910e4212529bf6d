//! Chat history - the append-only thread of an agent's conversation

use super::message::{Message, Role};

/// Chat history of an agent.
///
/// Starts `Uninitialized` and becomes `Threaded` on the first message.
/// Messages are only ever appended.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ChatHistory {
    #[default]
    Uninitialized,
    Threaded(Vec<Message>),
}

impl ChatHistory {
    /// Thread seeded with the given messages
    pub fn threaded(messages: Vec<Message>) -> Self {
        ChatHistory::Threaded(messages)
    }

    pub fn is_initialized(&self) -> bool {
        matches!(self, ChatHistory::Threaded(_))
    }

    pub fn messages(&self) -> &[Message] {
        match self {
            ChatHistory::Uninitialized => &[],
            ChatHistory::Threaded(messages) => messages,
        }
    }

    pub fn push(&mut self, message: Message) {
        match self {
            ChatHistory::Uninitialized => *self = ChatHistory::Threaded(vec![message]),
            ChatHistory::Threaded(messages) => messages.push(message),
        }
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages().last()
    }

    /// Last assistant message with text content
    pub fn last_reply(&self) -> Option<&Message> {
        self.messages()
            .iter()
            .rev()
            .find(|m| m.role == Role::Assistant && !m.content.is_empty())
    }

    pub fn len(&self) -> usize {
        self.messages().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_initializes_thread() {
        let mut history = ChatHistory::default();
        assert!(!history.is_initialized());
        assert!(history.is_empty());

        history.push(Message::user("hi"));
        history.push(Message::assistant("hello"));

        assert!(history.is_initialized());
        assert_eq!(history.len(), 2);
        assert_eq!(history.last().map(|m| m.content.as_str()), Some("hello"));
    }

    #[test]
    fn test_last_reply_skips_tool_turns() {
        let history = ChatHistory::threaded(vec![
            Message::assistant("answer"),
            Message::assistant_with_tools("", vec![]),
            Message::tool_result("tc_0", "output"),
        ]);

        assert_eq!(history.last_reply().map(|m| m.content.as_str()), Some("answer"));
    }
}
