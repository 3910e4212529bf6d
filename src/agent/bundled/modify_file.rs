use crate::agent::context::AgentContext;
use crate::agent::definition::{with_base_instructions, AgentDefinition};
use crate::agent::input::{AgentInput, AgentInputs};
use crate::agent::kind::AgentKind;
use crate::capability::{self, Capability};

const INSTRUCTIONS: &str = "You are an Agent that edits a single local file. Read the file first, apply \
exactly the modification the User asked for, and write the complete new content back with createFile. \
Keep formatting and everything the User did not ask to change.";

const FOLDER_KEY: &str = "Folder Path";
const FILE_KEY: &str = "File Name";
const CHANGE_KEY: &str = "Modification";

/// Reads a file, applies a described change and writes it back.
#[derive(Debug, Default)]
pub struct ModifyFileAgent {
    folder: String,
    file_name: String,
    modification: String,
}

impl ModifyFileAgent {
    pub const NAME: &'static str = "Modify File";
}

impl AgentDefinition for ModifyFileAgent {
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
        format!(
            "Modify the file `{}` in the folder `{}` as follows:\n{}",
            self.file_name, self.folder, self.modification
        )
    }

    fn needed_inputs(&self) -> Vec<AgentInput> {
        vec![
            AgentInput::string(FOLDER_KEY),
            AgentInput::string(FILE_KEY),
            AgentInput::string(CHANGE_KEY),
        ]
    }

    fn parse_needed_inputs(&mut self, inputs: &AgentInputs) {
        self.folder = inputs.string(FOLDER_KEY);
        self.file_name = inputs.string(FILE_KEY);
        self.modification = inputs.string(CHANGE_KEY);
    }

    fn capabilities(&self, ctx: &AgentContext) -> Vec<Capability> {
        vec![
            capability::io::read_file(ctx.file_root.clone()),
            capability::io::create_file(ctx.file_root.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_inputs_leave_blanks() {
        let mut agent = ModifyFileAgent::default();
        let inputs = AgentInputs::from_pairs(&agent.needed_inputs(), &["File Name=notes.md"]).unwrap();

        agent.parse_needed_inputs(&inputs);

        assert_eq!(
            agent.initial_prompt(),
            "Modify the file `notes.md` in the folder `` as follows:\n"
        );
    }
}
