//! Agent capabilities - list other agents and delegate prompts to them

use std::sync::Arc;

use tracing::info;

use super::{string_arg, Capability, ParameterDefinition};
use crate::agent::{AgentContext, AgentRegistry, Message};
use crate::Result;

/// `getAgents`: comma separated names of the delegable agents
pub fn get_agents(agents: Arc<AgentRegistry>) -> Capability {
    Capability::provide(
        "getAgents",
        "Returns a list of available LLM Agents.",
        vec![],
        move |_args| Ok(agents.delegate_names().join(", ")),
    )
}

/// `getAgentArgs`: every delegable agent with its input signature
pub fn get_agent_args(agents: Arc<AgentRegistry>) -> Capability {
    Capability::provide(
        "getAgentArgs",
        "Returns a list of available LLM Agents, along with their respective arguments.",
        vec![],
        move |_args| Ok(agents.delegate_signatures().join("\n\n")),
    )
}

/// `promptAgent`: run another agent on a prompt and return its answer
pub fn prompt_agent(ctx: AgentContext) -> Capability {
    Capability::provide_async(
        "promptAgent",
        "Requests a Chat completion from another LLM Agent instance with the given prompt. \
         The returned completion should be shown to the User in order for them to understand \
         what this function has executed.",
        vec![
            ParameterDefinition::string(
                "agent",
                "The name of the LLM Agent that will be completing the prompt.",
            ),
            ParameterDefinition::string("prompt", "The prompt that needs to be completed by an LLM."),
        ],
        move |args| {
            let ctx = ctx.clone();
            async move {
                let agent = string_arg(&args, "agent")?;
                let prompt = string_arg(&args, "prompt")?;
                run_prompt(ctx, &agent, prompt).await
            }
        },
    )
}

/// All agent capabilities
pub fn all(ctx: &AgentContext) -> Vec<Capability> {
    vec![
        get_agents(ctx.agents.clone()),
        get_agent_args(ctx.agents.clone()),
        prompt_agent(ctx.clone()),
    ]
}

async fn run_prompt(ctx: AgentContext, agent_name: &str, prompt: String) -> Result<String> {
    let mut agent = ctx.create_delegate(agent_name)?;
    info!("Delegating prompt to {}", agent_name);

    agent.initialize_with(Message::user(prompt));
    agent.execute().await?;

    Ok(agent
        .history()
        .last()
        .map(|m| m.content.clone())
        .unwrap_or_default())
}
