//! Error types for Kore

use thiserror::Error;

/// Result type alias for Kore operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in Kore
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Unknown capability: {0}")]
    UnknownCapability(String),

    #[error("Unknown agent: {0}")]
    UnknownAgent(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Max iterations reached")]
    MaxIterations,

    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Other(err.to_string())
    }
}
