//! Special commands parser for interactive chat sessions
//!
//! This module parses and handles special commands that can be entered
//! during interactive chat sessions. Special commands allow users to:
//! - View session status
//! - Start a fresh conversation
//! - Display help information
//! - Exit the session
//!
//! Commands are prefixed with `/` and are case-insensitive.

use thiserror::Error;

/// Errors that can occur when parsing special commands
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Unknown command was entered
    #[error("Unknown command: {0}\n\nType '/help' to see available commands")]
    UnknownCommand(String),
}

/// Special commands that can be executed during interactive chat
///
/// These commands act on the session itself rather than being sent to
/// the completion endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecialCommand {
    /// Display help information
    ///
    /// Shows all available special commands and their usage.
    Help,

    /// Display session status
    ///
    /// Shows the active model, the endpoint base URL, and the number of
    /// messages exchanged so far.
    Status,

    /// Start a fresh conversation
    ///
    /// Drops the current history; the next prompt starts without any
    /// continuation context.
    New,

    /// Exit the interactive session
    ///
    /// Gracefully closes the chat session.
    Exit,

    /// Not a special command
    ///
    /// The input should be sent to the assistant as a prompt.
    None,
}

/// Parse a user input string into a special command
///
/// Checks if the input matches any special command pattern.
/// Commands are case-insensitive and may have multiple aliases.
///
/// # Arguments
///
/// * `input` - The user input string to parse
///
/// # Returns
///
/// Returns Ok(SpecialCommand) for valid commands or SpecialCommand::None
/// for regular prompts.
///
/// # Errors
///
/// Returns CommandError::UnknownCommand if input starts with "/" but is
/// not a valid command.
///
/// # Examples
///
/// ```
/// use chatterbot::commands::special_commands::{parse_special_command, SpecialCommand};
///
/// let cmd = parse_special_command("/new").unwrap();
/// assert_eq!(cmd, SpecialCommand::New);
///
/// let cmd = parse_special_command("hello there").unwrap();
/// assert_eq!(cmd, SpecialCommand::None);
///
/// // Invalid command returns error
/// assert!(parse_special_command("/foo").is_err());
/// ```
pub fn parse_special_command(input: &str) -> Result<SpecialCommand, CommandError> {
    let trimmed = input.trim();
    let lower = trimmed.to_lowercase();

    // If input doesn't start with "/", it's not a command (except exit/quit)
    if !trimmed.starts_with('/') && lower != "exit" && lower != "quit" {
        return Ok(SpecialCommand::None);
    }

    match lower.as_str() {
        // Status and help
        "/help" | "/?" => Ok(SpecialCommand::Help),
        "/status" => Ok(SpecialCommand::Status),

        // Conversation control
        "/new" => Ok(SpecialCommand::New),

        // Exit commands
        "exit" | "quit" | "/exit" | "/quit" => Ok(SpecialCommand::Exit),

        // Unknown command starting with "/"
        input if input.starts_with('/') => {
            let cmd = input.split_whitespace().next().unwrap_or(input);
            Err(CommandError::UnknownCommand(cmd.to_string()))
        }

        // Not a special command
        _ => Ok(SpecialCommand::None),
    }
}

/// Display help text for special commands
///
/// Shows all available special commands with their descriptions
/// and usage examples.
///
/// # Examples
///
/// ```
/// use chatterbot::commands::special_commands::print_help;
///
/// print_help();
/// ```
pub fn print_help() {
    println!(
        r#"
Special Commands for Interactive Chat
=====================================

SESSION INFORMATION:
  /status         - Show the active model and message count
  /help           - Show this help message
  /?              - Same as /help

CONVERSATION CONTROL:
  /new            - Drop the current conversation and start fresh

SESSION CONTROL:
  exit            - Exit interactive mode
  quit            - Same as exit

NOTES:
  - Commands are case-insensitive
  - Regular text (not starting with /) is sent to the assistant
  - Replies remember earlier turns until you run /new
"#
    );
}
