//! Chatterbot - Terminal chat client
//!
#![doc = "Chatterbot - Terminal chat client"]
#![doc = "Main entry point for the Chatterbot application."]

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use chatterbot::cli::{Cli, Commands};
use chatterbot::commands;
use chatterbot::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    init_tracing();

    // Parse command line arguments
    let cli = Cli::parse_args();

    // Load configuration
    let config_path = cli.config.as_deref().unwrap_or("chatterbot.yaml");
    let config = Config::load(config_path, &cli)?;

    // Validate configuration
    config.validate()?;

    // Execute command
    match cli.command {
        Commands::Chat { model, api_base } => {
            tracing::info!("Starting interactive chat");
            if let Some(m) = &model {
                tracing::debug!("Using model override: {}", m);
            }
            if let Some(b) = &api_base {
                tracing::debug!("Using API base override: {}", b);
            }

            // Delegate to the chat command handler
            // Moves `config` into the handler (match arms are exclusive)
            commands::chat::run_chat(config, model, api_base).await?;
            Ok(())
        }
        Commands::Ask {
            prompt,
            model,
            api_base,
        } => {
            tracing::info!("Sending one-shot prompt");
            if let Some(m) = &model {
                tracing::debug!("Using model override: {}", m);
            }
            if let Some(b) = &api_base {
                tracing::debug!("Using API base override: {}", b);
            }

            commands::ask::run_ask(config, prompt, model, api_base).await?;
            Ok(())
        }
    }
}

/// Initialize tracing subscriber with environment filter
fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("chatterbot=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
