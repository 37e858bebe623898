//! Conversation history for a chat session
//!
//! This module implements the append-only message store behind a chat
//! session: ordered messages with identifiers, timestamps, and sender
//! roles, plus the reverse lookup used to thread continuation context
//! into the next completion request.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Sender role for a conversation message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Message typed by the person chatting
    User,
    /// Message produced by the completion endpoint
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

/// A single turn in the conversation
///
/// Messages are immutable once appended. Assistant messages carry the
/// identifier issued by the completion endpoint, which is echoed back
/// on the next request as continuation context; user messages carry a
/// locally generated identifier that is never sent over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unique identifier for this message
    pub id: String,
    /// Message content
    pub text: String,
    /// Who authored the message
    pub role: Role,
    /// When the message was appended
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Creates a user message with a locally generated identifier
    ///
    /// # Arguments
    ///
    /// * `text` - The message content
    ///
    /// # Examples
    ///
    /// ```
    /// use chatterbot::conversation::{Message, Role};
    ///
    /// let message = Message::user("Hello!");
    /// assert_eq!(message.role, Role::User);
    /// assert_eq!(message.text, "Hello!");
    /// ```
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            role: Role::User,
            created_at: Utc::now(),
        }
    }

    /// Creates an assistant message carrying the endpoint-issued identifier
    ///
    /// # Arguments
    ///
    /// * `id` - The response identifier issued by the completion endpoint
    /// * `text` - The reply content
    ///
    /// # Examples
    ///
    /// ```
    /// use chatterbot::conversation::{Message, Role};
    ///
    /// let message = Message::assistant("resp_42", "Hi there!");
    /// assert_eq!(message.role, Role::Assistant);
    /// assert_eq!(message.id, "resp_42");
    /// ```
    pub fn assistant(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            role: Role::Assistant,
            created_at: Utc::now(),
        }
    }
}

/// Append-only, insertion-ordered message history
///
/// The conversation grows one message at a time and is never reordered
/// or edited in place. Rendering reads the whole transcript; the chat
/// session reads the most recent assistant message to pick up the
/// continuation identifier for the next request.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    /// Creates an empty conversation
    ///
    /// # Examples
    ///
    /// ```
    /// use chatterbot::conversation::Conversation;
    ///
    /// let conversation = Conversation::new();
    /// assert!(conversation.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message to the end of the conversation
    ///
    /// # Arguments
    ///
    /// * `message` - The message to append
    ///
    /// # Examples
    ///
    /// ```
    /// use chatterbot::conversation::{Conversation, Message};
    ///
    /// let mut conversation = Conversation::new();
    /// conversation.push(Message::user("Hello"));
    /// assert_eq!(conversation.len(), 1);
    /// ```
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Returns the most recent assistant message, if any
    ///
    /// Scans backwards so the cost is proportional to the distance from
    /// the end, which is at most one user turn during normal chatting.
    ///
    /// # Examples
    ///
    /// ```
    /// use chatterbot::conversation::{Conversation, Message};
    ///
    /// let mut conversation = Conversation::new();
    /// assert!(conversation.last_assistant_message().is_none());
    ///
    /// conversation.push(Message::user("Hello"));
    /// conversation.push(Message::assistant("resp_1", "Hi!"));
    /// conversation.push(Message::user("How are you?"));
    ///
    /// let last = conversation.last_assistant_message().unwrap();
    /// assert_eq!(last.id, "resp_1");
    /// ```
    pub fn last_assistant_message(&self) -> Option<&Message> {
        self.messages
            .iter()
            .rev()
            .find(|message| message.role == Role::Assistant)
    }

    /// Returns a reference to all messages in insertion order
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Returns the most recently appended message, if any
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Returns the number of messages in the conversation
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns true if the conversation has no messages
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
