//! Agent kinds - who may produce turns in a conversation

use serde::{Deserialize, Serialize};

/// The four agent kinds.
///
/// A human-assisted agent accepts user chat turns; an LLM-assisted
/// agent can run completions against the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentKind {
    Unassisted,
    HumanAssisted,
    LlmAssisted,
    HumanAndLlmAssisted,
}

impl AgentKind {
    pub fn is_human_assisted(self) -> bool {
        matches!(self, AgentKind::HumanAssisted | AgentKind::HumanAndLlmAssisted)
    }

    pub fn is_llm_assisted(self) -> bool {
        matches!(self, AgentKind::LlmAssisted | AgentKind::HumanAndLlmAssisted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_flags() {
        assert!(!AgentKind::Unassisted.is_human_assisted());
        assert!(!AgentKind::Unassisted.is_llm_assisted());
        assert!(AgentKind::HumanAssisted.is_human_assisted());
        assert!(!AgentKind::HumanAssisted.is_llm_assisted());
        assert!(!AgentKind::LlmAssisted.is_human_assisted());
        assert!(AgentKind::LlmAssisted.is_llm_assisted());
        assert!(AgentKind::HumanAndLlmAssisted.is_human_assisted());
        assert!(AgentKind::HumanAndLlmAssisted.is_llm_assisted());
    }
}
