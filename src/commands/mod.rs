/*!
Command handlers for the CLI

This module provides command handlers invoked by the CLI entrypoint.

It exposes two top-level command modules:

- `chat` - Interactive conversation in the terminal
- `ask`  - One-shot prompt that prints the reply and exits

These handlers are intentionally small and use the library components:
the responses client and the chat session.
*/

use crate::api::ResponsesClient;
use crate::commands::special_commands::{parse_special_command, print_help, SpecialCommand};
use crate::config::Config;
use crate::error::Result;
use crate::session::{ChatSession, SendOutcome, TypingPacing};

// Special commands parser for the interactive loop
pub mod special_commands;

/// Apply command-line overrides onto the loaded configuration
fn apply_overrides(config: &mut Config, model: Option<String>, api_base: Option<String>) {
    if let Some(model) = model {
        tracing::debug!("Overriding model from command line: {}", model);
        config.api.model = model;
    }
    if let Some(api_base) = api_base {
        tracing::debug!("Overriding API base URL from command line: {}", api_base);
        config.api.api_base = api_base;
    }
}

// Chat command handler
pub mod chat {
    //! Interactive chat handler.
    //!
    //! Builds a `ResponsesClient` and a `ChatSession`, then runs a
    //! readline-based loop that submits user input to the session and
    //! prints each assistant reply.

    use super::*;
    use rustyline::error::ReadlineError;
    use rustyline::DefaultEditor;
    use tokio::sync::watch;

    /// Start an interactive chat session
    ///
    /// # Arguments
    ///
    /// * `config` - Global configuration (consumed)
    /// * `model` - Optional override for the configured model
    /// * `api_base` - Optional override for the configured API base URL
    ///
    /// # Examples
    ///
    /// ```
    /// use chatterbot::commands::chat;
    /// use chatterbot::config::Config;
    ///
    /// // In application code:
    /// // chat::run_chat(Config::default(), None, None).await?;
    /// ```
    pub async fn run_chat(
        mut config: Config,
        model: Option<String>,
        api_base: Option<String>,
    ) -> Result<()> {
        tracing::info!("Starting interactive chat");

        apply_overrides(&mut config, model, api_base);

        let pacing = config.chat.pacing();
        let client = ResponsesClient::new(config.api.clone())?;
        let mut session = ChatSession::new(client.clone(), pacing);

        // Create readline instance
        let mut rl = DefaultEditor::new()?;

        print_welcome_banner(session.model());

        spawn_typing_notice(session.composing());

        loop {
            match rl.readline("you >> ") {
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }

                    // Check for special commands first
                    match parse_special_command(trimmed) {
                        Ok(SpecialCommand::Help) => {
                            print_help();
                            continue;
                        }
                        Ok(SpecialCommand::Status) => {
                            print_status_display(&session);
                            continue;
                        }
                        Ok(SpecialCommand::New) => {
                            use colored::Colorize;

                            // The old notice task exits on its own once the
                            // replaced session drops its sender.
                            session = ChatSession::new(client.clone(), pacing);
                            spawn_typing_notice(session.composing());
                            println!("{}\n", "Started a new conversation".green());
                            continue;
                        }
                        Ok(SpecialCommand::Exit) => break,
                        Ok(SpecialCommand::None) => {
                            // Regular chat turn
                        }
                        Err(e) => {
                            use colored::Colorize;

                            eprintln!("{}\n", e.to_string().red());
                            continue;
                        }
                    }

                    // Add to history
                    rl.add_history_entry(trimmed)?;

                    match session.send(trimmed).await {
                        Ok(SendOutcome::Replied(message)) => {
                            use colored::Colorize;

                            println!("\n{} {}\n", "bot >>".cyan().bold(), message.text);
                        }
                        Ok(SendOutcome::Ignored) => {}
                        Err(e) => {
                            use colored::Colorize;

                            tracing::error!("Chat turn failed: {:#}", e);
                            eprintln!("{}\n", format!("Error: {}", e).red());
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    tracing::error!("Readline error: {:?}", err);
                    break;
                }
            }
        }

        println!("Goodbye!");
        Ok(())
    }

    /// Print a typing notice whenever the session marks itself composing
    ///
    /// The task runs until the session that handed out the receiver is
    /// dropped, at which point `changed` returns an error and the loop ends.
    fn spawn_typing_notice(mut composing: watch::Receiver<bool>) {
        tokio::spawn(async move {
            use colored::Colorize;

            while composing.changed().await.is_ok() {
                if *composing.borrow() {
                    println!("{}", "bot is typing...".dimmed());
                }
            }
        });
    }

    /// Display welcome banner at the start of an interactive session
    ///
    /// Shows a formatted banner with the application name, the model in
    /// use, and basic instructions.
    fn print_welcome_banner(model: &str) {
        println!("\n╔══════════════════════════════════════════════════════════════╗");
        println!("║            Chatterbot Interactive Chat - Welcome!            ║");
        println!("╚══════════════════════════════════════════════════════════════╝\n");
        println!("Model: {}", model);
        println!("Type '/help' for available commands, 'exit' to quit\n");
    }

    /// Display detailed status information about the current session
    ///
    /// Shows the model in use, the endpoint base URL, and the conversation
    /// length. This is called when the user types the '/status' command.
    /// Turns run to completion before the prompt returns, so the composing
    /// flag is always settled here; the live notice comes from the typing
    /// task instead.
    ///
    /// # Arguments
    ///
    /// * `session` - The active chat session
    fn print_status_display(session: &ChatSession) {
        println!("\n╔══════════════════════════════════════════════════════════════╗");
        println!("║                  Chatterbot Session Status                   ║");
        println!("╚══════════════════════════════════════════════════════════════╝\n");
        println!("Model:    {}", session.model());
        println!("Endpoint: {}", session.api_base());
        println!("Messages: {}", session.conversation().len());
        println!();
    }

}

// Ask command handler
pub mod ask {
    //! One-shot prompt handler.
    //!
    //! Sends a single prompt through a `ChatSession` with the typing
    //! pacing disabled and prints the assistant reply to stdout.

    use super::*;

    /// Send one prompt and print the reply
    ///
    /// # Arguments
    ///
    /// * `config` - Global configuration (consumed)
    /// * `prompt` - The prompt text to send
    /// * `model` - Optional override for the configured model
    /// * `api_base` - Optional override for the configured API base URL
    ///
    /// # Examples
    ///
    /// ```
    /// use chatterbot::commands::ask;
    /// use chatterbot::config::Config;
    ///
    /// // In application code:
    /// // ask::run_ask(Config::default(), "hello".to_string(), None, None).await?;
    /// ```
    pub async fn run_ask(
        mut config: Config,
        prompt: String,
        model: Option<String>,
        api_base: Option<String>,
    ) -> Result<()> {
        tracing::info!("Sending one-shot prompt");

        apply_overrides(&mut config, model, api_base);

        let client = ResponsesClient::new(config.api.clone())?;
        let mut session = ChatSession::new(client, TypingPacing::immediate());

        match session.send(&prompt).await? {
            SendOutcome::Replied(message) => {
                println!("{}", message.text);
            }
            SendOutcome::Ignored => {
                tracing::debug!("Prompt was empty after trimming, nothing sent");
            }
        }

        Ok(())
    }

}
