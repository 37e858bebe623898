//! Command-line interface definition for Chatterbot
//!
//! This module defines the CLI structure using clap's derive API,
//! providing commands for interactive chat and one-shot prompts.

use clap::{Parser, Subcommand};

/// Chatterbot - terminal chat client
///
/// Chat with a hosted language model from the terminal. Replies are
/// threaded through server-side context, so follow-up questions work
/// the way they do in a conversation.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatterbot")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "chatterbot.yaml")]
    pub config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for Chatterbot
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start an interactive chat session
    Chat {
        /// Override the configured model
        #[arg(short, long)]
        model: Option<String>,

        /// Override the completion service base URL
        #[arg(long)]
        api_base: Option<String>,
    },

    /// Send a single prompt and print the reply
    Ask {
        /// The prompt to send
        prompt: String,

        /// Override the configured model
        #[arg(short, long)]
        model: Option<String>,

        /// Override the completion service base URL
        #[arg(long)]
        api_base: Option<String>,
    },
}

impl Cli {
    /// Parse command line arguments
    ///
    /// # Returns
    ///
    /// Returns the parsed CLI structure
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            config: Some("chatterbot.yaml".to_string()),
            verbose: false,
            command: Commands::Chat {
                model: None,
                api_base: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default() {
        let cli = Cli::default();
        assert_eq!(cli.config, Some("chatterbot.yaml".to_string()));
        assert!(!cli.verbose);
        assert!(matches!(cli.command, Commands::Chat { .. }));
    }

    #[test]
    fn test_cli_parse_chat_command() {
        let cli = Cli::try_parse_from(["chatterbot", "chat"]);
        assert!(cli.is_ok());
        let cli = cli.unwrap();
        assert!(matches!(cli.command, Commands::Chat { .. }));
    }

    #[test]
    fn test_cli_parse_chat_with_model() {
        let cli = Cli::try_parse_from(["chatterbot", "chat", "--model", "gpt-4.1-mini"]);
        assert!(cli.is_ok());
        let cli = cli.unwrap();
        if let Commands::Chat { model, api_base } = cli.command {
            assert_eq!(model, Some("gpt-4.1-mini".to_string()));
            assert_eq!(api_base, None);
        } else {
            panic!("Expected Chat command");
        }
    }

    #[test]
    fn test_cli_parse_chat_with_api_base() {
        let cli = Cli::try_parse_from(["chatterbot", "chat", "--api-base", "http://localhost:8080"]);
        assert!(cli.is_ok());
        let cli = cli.unwrap();
        if let Commands::Chat { model, api_base } = cli.command {
            assert_eq!(model, None);
            assert_eq!(api_base, Some("http://localhost:8080".to_string()));
        } else {
            panic!("Expected Chat command");
        }
    }

    #[test]
    fn test_cli_parse_ask_command() {
        let cli = Cli::try_parse_from(["chatterbot", "ask", "What time is it?"]);
        assert!(cli.is_ok());
        let cli = cli.unwrap();
        if let Commands::Ask {
            prompt,
            model,
            api_base,
        } = cli.command
        {
            assert_eq!(prompt, "What time is it?");
            assert_eq!(model, None);
            assert_eq!(api_base, None);
        } else {
            panic!("Expected Ask command");
        }
    }

    #[test]
    fn test_cli_parse_ask_with_model() {
        let cli = Cli::try_parse_from(["chatterbot", "ask", "Hello", "--model", "gpt-4.1-mini"]);
        assert!(cli.is_ok());
        let cli = cli.unwrap();
        if let Commands::Ask { prompt, model, .. } = cli.command {
            assert_eq!(prompt, "Hello");
            assert_eq!(model, Some("gpt-4.1-mini".to_string()));
        } else {
            panic!("Expected Ask command");
        }
    }

    #[test]
    fn test_cli_parse_ask_requires_prompt() {
        let cli = Cli::try_parse_from(["chatterbot", "ask"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::try_parse_from(["chatterbot", "--config", "custom.yaml", "chat"]);
        assert!(cli.is_ok());
        let cli = cli.unwrap();
        assert_eq!(cli.config, Some("custom.yaml".to_string()));
    }

    #[test]
    fn test_cli_parse_with_verbose() {
        let cli = Cli::try_parse_from(["chatterbot", "-v", "chat"]);
        assert!(cli.is_ok());
        let cli = cli.unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_parse_missing_command() {
        let cli = Cli::try_parse_from(["chatterbot"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_cli_parse_invalid_command() {
        let cli = Cli::try_parse_from(["chatterbot", "invalid"]);
        assert!(cli.is_err());
    }
}
