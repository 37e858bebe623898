//! Client for the hosted responses endpoint
//!
//! This module implements the HTTP client behind a chat session. Each user
//! turn becomes a single POST to the `/v1/responses` endpoint carrying the
//! prompt, the fixed instructions, and the previous response identifier
//! when one exists; the reply is the first text fragment of the response
//! output together with the server-issued response identifier.

use crate::config::ApiConfig;
use crate::error::{ChatterbotError, Result};

use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Client for the completion service
///
/// Holds a reusable HTTP client, the endpoint configuration, and the
/// bearer credential resolved at construction time. Requests carry no
/// explicit timeout; the transport default applies.
///
/// # Examples
///
/// ```no_run
/// use chatterbot::api::ResponsesClient;
/// use chatterbot::config::ApiConfig;
///
/// # async fn example() -> chatterbot::error::Result<()> {
/// let config = ApiConfig {
///     credential: Some("sk-test".to_string()),
///     ..ApiConfig::default()
/// };
/// let client = ResponsesClient::new(config)?;
/// let reply = client.generate("Hello!", None).await?;
/// println!("{}", reply.text);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ResponsesClient {
    client: Client,
    config: ApiConfig,
    credential: String,
}

/// Request structure for the responses endpoint
#[derive(Debug, Serialize)]
struct ResponsesRequest<'a> {
    model: &'a str,
    input: &'a str,
    instructions: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    previous_response_id: Option<&'a str>,
}

/// Response structure from the responses endpoint
///
/// Only the response identifier and the first text fragment are consumed;
/// everything else the service returns is ignored.
#[derive(Debug, Deserialize)]
struct ResponsesResponse {
    id: String,
    #[serde(default)]
    output: Vec<OutputItem>,
}

/// One output item in a response
#[derive(Debug, Deserialize)]
struct OutputItem {
    #[serde(default)]
    content: Vec<ContentItem>,
}

/// One content fragment within an output item
#[derive(Debug, Deserialize)]
struct ContentItem {
    #[serde(default)]
    text: String,
}

/// A generated reply from the completion service
///
/// Carries the server-issued response identifier alongside the reply text.
/// The identifier is echoed back as `previous_response_id` on the next
/// request so the service can thread conversation context server-side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedReply {
    /// Response identifier issued by the service
    pub id: String,
    /// Reply text; empty when the service returned no output
    pub text: String,
}

impl ResponsesClient {
    /// Create a new responses client
    ///
    /// # Arguments
    ///
    /// * `config` - Endpoint configuration containing base URL, model,
    ///   instructions, and optionally the bearer credential
    ///
    /// # Returns
    ///
    /// Returns a new ResponsesClient instance
    ///
    /// # Errors
    ///
    /// Returns [`ChatterbotError::MissingCredential`] if no credential is
    /// configured and the `CHATTERBOT_API_KEY` environment variable is not
    /// set, or a completion error if HTTP client initialization fails
    ///
    /// # Examples
    ///
    /// ```
    /// use chatterbot::api::ResponsesClient;
    /// use chatterbot::config::ApiConfig;
    ///
    /// let config = ApiConfig {
    ///     credential: Some("sk-test".to_string()),
    ///     ..ApiConfig::default()
    /// };
    /// let client = ResponsesClient::new(config);
    /// assert!(client.is_ok());
    /// ```
    pub fn new(config: ApiConfig) -> Result<Self> {
        let credential = config
            .resolve_credential()
            .ok_or(ChatterbotError::MissingCredential)?;

        let client = Client::builder()
            .user_agent(concat!("chatterbot/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                ChatterbotError::Completion(format!("Failed to create HTTP client: {}", e))
            })?;

        tracing::info!(
            "Initialized responses client: api_base={}, model={}",
            config.api_base,
            config.model
        );

        Ok(Self {
            client,
            config,
            credential,
        })
    }

    /// Get the configured model name
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Get the configured base URL of the completion service
    pub fn api_base(&self) -> &str {
        &self.config.api_base
    }

    /// Build the full URL for the responses endpoint
    fn endpoint_url(&self) -> String {
        format!(
            "{}/v1/responses",
            self.config.api_base.trim_end_matches('/')
        )
    }

    /// Generate a reply for a single user turn
    ///
    /// Sends one POST request and decodes the reply. A response with no
    /// output items is a degenerate success and yields an empty reply
    /// text rather than an error.
    ///
    /// # Arguments
    ///
    /// * `prompt` - The user prompt, already trimmed and non-empty
    /// * `previous_response_id` - Identifier of the most recent reply in
    ///   this conversation, if any, used by the service to thread context
    ///
    /// # Returns
    ///
    /// Returns the generated reply with its server-issued identifier
    ///
    /// # Errors
    ///
    /// Returns a completion error if the request fails, the service
    /// returns a non-success status, or the response body cannot be parsed
    pub async fn generate(
        &self,
        prompt: &str,
        previous_response_id: Option<&str>,
    ) -> Result<GeneratedReply> {
        let url = self.endpoint_url();

        let request = ResponsesRequest {
            model: &self.config.model,
            input: prompt,
            instructions: &self.config.instructions,
            previous_response_id,
        };

        tracing::debug!(
            "Sending completion request: model={}, continuation={}",
            self.config.model,
            previous_response_id.is_some()
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.credential))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Completion request failed: {}", e);
                ChatterbotError::Completion(format!("Completion request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Completion endpoint returned {}: {}", status, error_text);
            return Err(ChatterbotError::Completion(format!(
                "Completion endpoint returned {}: {}",
                status, error_text
            ))
            .into());
        }

        let decoded: ResponsesResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse completion response: {}", e);
            ChatterbotError::Completion(format!("Failed to parse completion response: {}", e))
        })?;

        let text = decoded
            .output
            .first()
            .and_then(|item| item.content.first())
            .map(|fragment| fragment.text.clone())
            .unwrap_or_default();

        tracing::debug!(
            "Completion response: id={}, text_len={}",
            decoded.id,
            text.len()
        );

        Ok(GeneratedReply {
            id: decoded.id,
            text,
        })
    }
}
