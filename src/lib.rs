//! Kore - chat with configurable LLM agents
//!
//! This library provides the agent core: agent kinds and definitions,
//! the capability registry the model can call into, and the dispatch
//! loop that feeds capability results back into a conversation.

pub mod agent;
pub mod capability;
pub mod conversation;
pub mod files;
pub mod adapters;
pub mod config;
pub mod error;
pub mod ui;

pub use error::{Error, Result};
