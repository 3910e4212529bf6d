//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

use crate::agent::llm::openai::OPENAI_API_BASE;
use crate::error::Error;
use crate::Result;

/// Environment variable consulted when no API key is configured
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// LLM provider to use
    #[serde(default = "default_provider")]
    pub provider: String,

    /// API key for the provider
    #[serde(default)]
    pub api_key: String,

    /// Base URL of the chat completions API
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Model to use
    #[serde(default = "default_model")]
    pub model: String,

    /// Maximum completion round-trips per agent run
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    /// Base directory the file capabilities resolve paths against
    #[serde(default = "default_file_root")]
    pub file_root: PathBuf,
}

fn default_provider() -> String {
    "openai".to_string()
}

fn default_api_base() -> String {
    OPENAI_API_BASE.to_string()
}

fn default_model() -> String {
    "gpt-4o".to_string()
}

fn default_max_iterations() -> usize {
    20
}

fn default_file_root() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            api_key: String::new(),
            api_base: default_api_base(),
            model: default_model(),
            max_iterations: default_max_iterations(),
            file_root: default_file_root(),
        }
    }
}

impl Config {
    /// Configured API key, falling back to `OPENAI_API_KEY`
    pub fn resolved_api_key(&self) -> String {
        if !self.api_key.is_empty() {
            return self.api_key.clone();
        }
        std::env::var(API_KEY_ENV).unwrap_or_default()
    }
}

/// Get the config directory path
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".kore")
}

/// Get the config file path
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

/// Load configuration from file
pub fn load() -> Result<Config> {
    let path = config_path();

    if !path.exists() {
        return Err(Error::Config(format!(
            "Config not found at {:?}. Run 'kore onboard' first.",
            path
        )));
    }

    let content = std::fs::read_to_string(&path)?;
    let config: Config = serde_json::from_str(&content)?;
    Ok(config)
}

/// Load configuration, using defaults when no file exists yet
pub fn load_or_default() -> Result<Config> {
    if config_path().exists() {
        load()
    } else {
        debug!("No config file, using defaults");
        Ok(Config::default())
    }
}

/// Save configuration to file
pub fn save(config: &Config) -> Result<()> {
    let path = config_path();

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let content = serde_json::to_string_pretty(config)?;
    std::fs::write(&path, content)?;
    Ok(())
}

/// Interactive setup wizard
pub fn onboard() -> Result<()> {
    use crate::ui;
    use inquire::{Confirm, Select, Text};

    ui::print_kore_header("Setup Wizard", "local");
    println!("  Let's get Kore talking to a model.\n");

    let mut config = load_or_default()?;

    // 1. API key
    let key = Text::new("Enter your OpenAI API key (leave empty to use $OPENAI_API_KEY):")
        .prompt()
        .map_err(|e| Error::Config(format!("Prompt failed: {}", e)))?;
    config.api_key = key.trim().to_string();

    // 2. Model
    let models = vec!["gpt-4o", "gpt-4o-mini", "gpt-4-turbo", "gpt-3.5-turbo"];
    let model = Select::new("Choose a model:", models)
        .prompt()
        .map_err(|e| Error::Config(format!("Prompt failed: {}", e)))?;
    config.model = model.to_string();

    // 3. Compatible endpoint
    let custom_base = Confirm::new("Use an OpenAI-compatible endpoint other than api.openai.com?")
        .with_default(false)
        .prompt()
        .map_err(|e| Error::Config(format!("Prompt failed: {}", e)))?;
    if custom_base {
        let base = Text::new("Enter the API base URL:")
            .prompt()
            .map_err(|e| Error::Config(format!("Prompt failed: {}", e)))?;
        config.api_base = base.trim().to_string();
    }

    // 4. File root
    ui::print_step(&format!("File capabilities resolve paths under {:?}", config.file_root));
    let keep_root = Confirm::new("Keep this base directory?")
        .with_default(true)
        .prompt()
        .map_err(|e| Error::Config(format!("Prompt failed: {}", e)))?;
    if !keep_root {
        let root = Text::new("Enter the base directory:")
            .prompt()
            .map_err(|e| Error::Config(format!("Prompt failed: {}", e)))?;
        config.file_root = PathBuf::from(root.trim());
    }

    ui::print_thinking("Saving configuration");
    save(&config)?;
    ui::print_success("Setup complete! Run 'kore chat' to start a conversation.");

    Ok(())
}
