//! Configuration management for Chatterbot
//!
//! This module handles loading, parsing, validating, and managing
//! configuration from files, environment variables, and CLI overrides.

use crate::error::{ChatterbotError, Result};
use crate::session::TypingPacing;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Main configuration structure for Chatterbot
///
/// This structure holds all configuration needed for a chat session:
/// the completion endpoint settings and the pacing of the composing
/// indicator.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Completion endpoint configuration
    #[serde(default)]
    pub api: ApiConfig,

    /// Chat pacing configuration
    #[serde(default)]
    pub chat: ChatConfig,
}

/// Completion endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the completion service
    ///
    /// The `/v1/responses` path is appended when requests are built, so
    /// tests and local gateways can point this at a mock server.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Model requested on every turn
    #[serde(default = "default_model")]
    pub model: String,

    /// Bearer credential for the completion service
    ///
    /// Usually left unset in the file and supplied through the
    /// `CHATTERBOT_API_KEY` environment variable instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential: Option<String>,

    /// Fixed instructions sent with every request
    #[serde(default = "default_instructions")]
    pub instructions: String,
}

fn default_api_base() -> String {
    "https://api.openai.com".to_string()
}

fn default_model() -> String {
    "gpt-4.1-nano".to_string()
}

fn default_instructions() -> String {
    "You are Chatterbot, a bot designed for chatting only. You are addressing minors \
     and easily offended people, so never use or tolerate offensive language."
        .to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            model: default_model(),
            credential: None,
            instructions: default_instructions(),
        }
    }
}

impl ApiConfig {
    /// Resolve the bearer credential
    ///
    /// The config value wins over the `CHATTERBOT_API_KEY` environment
    /// variable; empty strings count as unset in both places.
    pub fn resolve_credential(&self) -> Option<String> {
        self.credential
            .clone()
            .filter(|credential| !credential.is_empty())
            .or_else(|| std::env::var("CHATTERBOT_API_KEY").ok())
            .filter(|credential| !credential.is_empty())
    }
}

/// Chat pacing configuration
///
/// Controls when the composing indicator appears and how long replies
/// are held back before landing in the transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Delay before the composing indicator appears (milliseconds)
    #[serde(default = "default_show_typing_after_ms")]
    pub show_typing_after_ms: u64,

    /// Delay between the reply arriving and it being shown (milliseconds)
    #[serde(default = "default_typing_settle_ms")]
    pub typing_settle_ms: u64,
}

fn default_show_typing_after_ms() -> u64 {
    1000
}

fn default_typing_settle_ms() -> u64 {
    2000
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            show_typing_after_ms: default_show_typing_after_ms(),
            typing_settle_ms: default_typing_settle_ms(),
        }
    }
}

impl ChatConfig {
    /// Convert the millisecond fields into a session pacing
    pub fn pacing(&self) -> TypingPacing {
        TypingPacing::new(
            Duration::from_millis(self.show_typing_after_ms),
            Duration::from_millis(self.typing_settle_ms),
        )
    }
}

impl Config {
    /// Load configuration from file with environment and CLI overrides
    ///
    /// # Arguments
    ///
    /// * `path` - Path to configuration file
    /// * `cli` - CLI arguments for overrides
    ///
    /// # Returns
    ///
    /// Returns the loaded and merged configuration
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read or parsed
    pub fn load(path: &str, cli: &crate::cli::Cli) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            Self::from_file(path)?
        } else {
            tracing::debug!("Config file not found at {}, using defaults", path);
            Self::default()
        };

        config.apply_env_vars();
        config.apply_cli_overrides(cli);

        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ChatterbotError::Config(format!("Failed to read config file: {}", e)))?;
        serde_yaml::from_str(&contents)
            .map_err(|e| ChatterbotError::Config(format!("Failed to parse config: {}", e)).into())
    }

    fn apply_env_vars(&mut self) {
        if let Ok(api_base) = std::env::var("CHATTERBOT_API_BASE") {
            self.api.api_base = api_base;
        }

        if let Ok(model) = std::env::var("CHATTERBOT_MODEL") {
            self.api.model = model;
        }

        // The credential is read from the environment at resolution time
        // (see ApiConfig::resolve_credential), never copied into the config.
    }

    fn apply_cli_overrides(&mut self, cli: &crate::cli::Cli) {
        if cli.verbose {
            tracing::debug!("Verbose mode enabled");
        }
    }

    /// Validate the configuration
    ///
    /// Ensures all configuration values are within acceptable ranges
    /// and that required fields are properly set.
    ///
    /// # Returns
    ///
    /// Returns Ok if configuration is valid
    ///
    /// # Errors
    ///
    /// Returns error if any validation check fails
    pub fn validate(&self) -> Result<()> {
        if self.api.api_base.is_empty() {
            return Err(ChatterbotError::Config("api.api_base cannot be empty".to_string()).into());
        }

        if !self.api.api_base.starts_with("http://") && !self.api.api_base.starts_with("https://") {
            return Err(ChatterbotError::Config(format!(
                "api.api_base must start with http:// or https://, got: {}",
                self.api.api_base
            ))
            .into());
        }

        if self.api.model.is_empty() {
            return Err(ChatterbotError::Config("api.model cannot be empty".to_string()).into());
        }

        if self.api.instructions.is_empty() {
            return Err(
                ChatterbotError::Config("api.instructions cannot be empty".to_string()).into(),
            );
        }

        if self.chat.show_typing_after_ms > 60_000 {
            return Err(ChatterbotError::Config(
                "chat.show_typing_after_ms must be at most 60000".to_string(),
            )
            .into());
        }

        if self.chat.typing_settle_ms > 60_000 {
            return Err(ChatterbotError::Config(
                "chat.typing_settle_ms must be at most 60000".to_string(),
            )
            .into());
        }

        Ok(())
    }
}
