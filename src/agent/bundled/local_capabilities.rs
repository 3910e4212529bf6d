use crate::agent::context::AgentContext;
use crate::agent::definition::{with_base_instructions, AgentDefinition};
use crate::agent::kind::AgentKind;
use crate::capability::{self, Capability};

const INSTRUCTIONS: &str = "You are an Agent that works with the User's local files. You can read \
files, create files and parse CSV files. Paths are given as a folder relative to the base directory \
plus a file name. Confirm what you changed after every file you create.";

/// General purpose access to the file capabilities.
#[derive(Debug, Default)]
pub struct LocalCapabilitiesAgent;

impl LocalCapabilitiesAgent {
    pub const NAME: &'static str = "Local Capabilities";
}

impl AgentDefinition for LocalCapabilitiesAgent {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn kind(&self) -> AgentKind {
        AgentKind::HumanAndLlmAssisted
    }

    fn instructions(&self) -> String {
        with_base_instructions(INSTRUCTIONS)
    }

    fn initial_prompt(&self) -> String {
        "Tell me which file operations you can perform and ask what I would like to do.".to_string()
    }

    fn capabilities(&self, ctx: &AgentContext) -> Vec<Capability> {
        capability::io::all(ctx.file_root.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::llm::FakeLlmClient;
    use crate::agent::{Agent, AgentRegistry};
    use serde_json::json;
    use std::path::PathBuf;
    use std::sync::Arc;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_creates_file_under_root() {
        let tmp = TempDir::new().unwrap();
        let client = Arc::new(FakeLlmClient::with_tool_call(
            "createFile",
            json!({"folderPath": "drafts", "fileName": "todo.txt", "fileContent": "buy milk"}),
            "Created drafts/todo.txt",
        ));
        let ctx = AgentContext {
            client,
            agents: Arc::new(AgentRegistry::new()),
            model: "fake-model".to_string(),
            max_iterations: 5,
            file_root: Arc::new(PathBuf::from(tmp.path())),
        };

        let mut agent = Agent::new(Box::new(LocalCapabilitiesAgent), ctx);
        agent.add_user_chat("make a todo file").unwrap();
        agent.execute().await.unwrap();

        let written = std::fs::read_to_string(tmp.path().join("drafts").join("todo.txt")).unwrap();
        assert_eq!(written, "buy milk");
    }
}
