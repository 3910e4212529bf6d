//! Adapters module - user-facing front ends over the agent core.
//!
//! # Supported Channels
//!
//! - **CLI** - Interactive command line interface
//!
//! # Adding a New Channel
//!
//! 1. Create a new file (e.g., `web.rs`)
//! 2. Build agents through [`AgentContext::create_agent`](crate::agent::AgentContext::create_agent)
//! 3. Drive them with `add_user_chat` and `execute`

pub mod cli;
