//! Chatterbot - Terminal chat client library
//!
//! This library provides the core functionality for the Chatterbot chat
//! client, including the conversation store, the completion session, the
//! responses API client, and configuration.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `conversation`: Ordered message store backing a chat session
//! - `session`: Completion session driving one exchange at a time
//! - `api`: HTTP client for the hosted responses endpoint
//! - `config`: Configuration management and validation
//! - `error`: Error types and result aliases
//! - `cli`: Command-line interface definition
//!
//! # Example
//!
//! ```no_run
//! use chatterbot::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("chatterbot.yaml", &Default::default())?;
//!     config.validate()?;
//!
//!     // Session usage would go here
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod conversation;
pub mod error;
pub mod session;

// Re-export commonly used types
pub use api::{GeneratedReply, ResponsesClient};
pub use config::Config;
pub use conversation::{Conversation, Message, Role};
pub use error::{ChatterbotError, Result};
pub use session::{ChatSession, SendOutcome, TypingPacing};
