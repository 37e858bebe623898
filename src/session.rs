//! Chat session tying the conversation to the completion endpoint
//!
//! This module implements the send cycle for one chat session: validate
//! the prompt, append the user message, issue a single completion request
//! with continuation context, and append the reply. A watch channel
//! carries the composing indicator so whatever renders the transcript can
//! react to it without polling.

use crate::api::ResponsesClient;
use crate::conversation::{Conversation, Message};
use crate::error::Result;

use std::time::Duration;
use tokio::sync::watch;

/// Pacing for the composing indicator
///
/// The indicator is not shown immediately on dispatch; it appears after
/// `show_after` so fast replies do not flash it, and the reply is held
/// back for `settle_for` after it arrives so the exchange reads at a
/// conversational pace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingPacing {
    /// Delay between dispatching a request and showing the indicator
    pub show_after: Duration,
    /// Delay between the reply arriving and it being appended
    pub settle_for: Duration,
}

impl TypingPacing {
    /// Creates a pacing from explicit delays
    pub fn new(show_after: Duration, settle_for: Duration) -> Self {
        Self {
            show_after,
            settle_for,
        }
    }

    /// Creates a pacing with zero delays
    ///
    /// Replies are appended as soon as they arrive. Used by one-shot
    /// invocations and tests, where pacing only slows things down.
    pub fn immediate() -> Self {
        Self {
            show_after: Duration::ZERO,
            settle_for: Duration::ZERO,
        }
    }
}

impl Default for TypingPacing {
    fn default() -> Self {
        Self {
            show_after: Duration::from_secs(1),
            settle_for: Duration::from_secs(2),
        }
    }
}

/// Outcome of a send call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// The prompt was empty after trimming; nothing was sent or appended
    Ignored,
    /// The assistant message that was appended to the conversation
    Replied(Message),
}

/// A chat session against the completion endpoint
///
/// The session owns the conversation history and serializes turns: `send`
/// takes the session exclusively, so a second prompt cannot be dispatched
/// while one is in flight.
///
/// # Examples
///
/// ```no_run
/// use chatterbot::api::ResponsesClient;
/// use chatterbot::config::ApiConfig;
/// use chatterbot::session::{ChatSession, SendOutcome, TypingPacing};
///
/// # async fn example() -> chatterbot::error::Result<()> {
/// let config = ApiConfig {
///     credential: Some("sk-test".to_string()),
///     ..ApiConfig::default()
/// };
/// let client = ResponsesClient::new(config)?;
/// let mut session = ChatSession::new(client, TypingPacing::default());
///
/// match session.send("Hello!").await? {
///     SendOutcome::Replied(message) => println!("{}", message.text),
///     SendOutcome::Ignored => {}
/// }
/// # Ok(())
/// # }
/// ```
pub struct ChatSession {
    client: ResponsesClient,
    conversation: Conversation,
    pacing: TypingPacing,
    composing: watch::Sender<bool>,
}

impl ChatSession {
    /// Creates a new session with an empty conversation
    ///
    /// # Arguments
    ///
    /// * `client` - The responses client used for every turn
    /// * `pacing` - Delays applied around the composing indicator
    pub fn new(client: ResponsesClient, pacing: TypingPacing) -> Self {
        let (composing, _) = watch::channel(false);
        Self {
            client,
            conversation: Conversation::new(),
            pacing,
            composing,
        }
    }

    /// Returns the conversation history
    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Returns the model requested on every turn
    pub fn model(&self) -> &str {
        self.client.model()
    }

    /// Returns the base URL of the completion service
    pub fn api_base(&self) -> &str {
        self.client.api_base()
    }

    /// Subscribes to the composing indicator
    ///
    /// The receiver observes `true` while the assistant is composing a
    /// reply and `false` otherwise. Any number of receivers may be
    /// active; the indicator works the same with none at all.
    pub fn composing(&self) -> watch::Receiver<bool> {
        self.composing.subscribe()
    }

    /// Returns the current composing indicator state
    pub fn is_composing(&self) -> bool {
        *self.composing.borrow()
    }

    /// Sends one user turn and appends the reply
    ///
    /// The prompt is trimmed first; if nothing remains the turn is
    /// ignored entirely. Otherwise the user message is appended before
    /// the request is dispatched, so the transcript shows it regardless
    /// of how the network call ends. The request carries the identifier
    /// of the most recent assistant message as continuation context.
    ///
    /// The composing indicator turns on `show_after` into the turn and
    /// turns off when the reply is appended or the call fails. On
    /// failure the user message stays in the conversation and no
    /// assistant message is appended.
    ///
    /// # Arguments
    ///
    /// * `prompt` - The raw prompt text, trimmed internally
    ///
    /// # Returns
    ///
    /// Returns [`SendOutcome::Ignored`] for empty prompts, otherwise
    /// [`SendOutcome::Replied`] with the appended assistant message
    ///
    /// # Errors
    ///
    /// Returns a completion error if the request fails; the composing
    /// indicator is cleared before the error is returned
    pub async fn send(&mut self, prompt: &str) -> Result<SendOutcome> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            tracing::debug!("Ignoring empty prompt");
            return Ok(SendOutcome::Ignored);
        }

        self.conversation.push(Message::user(prompt));

        let previous_id = self
            .conversation
            .last_assistant_message()
            .map(|message| message.id.clone());

        // The request goes out immediately; the indicator timer runs
        // alongside it rather than ahead of it.
        let show_after = self.pacing.show_after;
        let (reply, ()) = tokio::join!(
            self.client.generate(prompt, previous_id.as_deref()),
            async {
                tokio::time::sleep(show_after).await;
                self.composing.send_replace(true);
            }
        );

        match reply {
            Ok(reply) => {
                tokio::time::sleep(self.pacing.settle_for).await;
                self.composing.send_replace(false);

                let message = Message::assistant(reply.id, reply.text);
                self.conversation.push(message.clone());
                Ok(SendOutcome::Replied(message))
            }
            Err(e) => {
                self.composing.send_replace(false);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;

    fn offline_session() -> ChatSession {
        let config = ApiConfig {
            api_base: "http://localhost:9".to_string(),
            credential: Some("test-key".to_string()),
            ..ApiConfig::default()
        };
        let client = ResponsesClient::new(config).unwrap();
        ChatSession::new(client, TypingPacing::immediate())
    }

    #[tokio::test]
    async fn test_send_ignores_empty_prompt() {
        let mut session = offline_session();
        let outcome = session.send("").await.unwrap();
        assert_eq!(outcome, SendOutcome::Ignored);
        assert!(session.conversation().is_empty());
    }

    #[tokio::test]
    async fn test_send_ignores_whitespace_prompt() {
        let mut session = offline_session();
        let outcome = session.send("   \t\n  ").await.unwrap();
        assert_eq!(outcome, SendOutcome::Ignored);
        assert!(session.conversation().is_empty());
        assert!(!session.is_composing());
    }

    #[tokio::test]
    async fn test_composing_starts_false() {
        let session = offline_session();
        assert!(!session.is_composing());

        let receiver = session.composing();
        assert!(!*receiver.borrow());
    }

    #[test]
    fn test_default_pacing() {
        let pacing = TypingPacing::default();
        assert_eq!(pacing.show_after, Duration::from_secs(1));
        assert_eq!(pacing.settle_for, Duration::from_secs(2));
    }

    #[test]
    fn test_immediate_pacing_has_zero_delays() {
        let pacing = TypingPacing::immediate();
        assert_eq!(pacing.show_after, Duration::ZERO);
        assert_eq!(pacing.settle_for, Duration::ZERO);
    }
}
