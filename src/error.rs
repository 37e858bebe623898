//! Error types for Chatterbot
//!
//! This module defines all error types used throughout the application,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for Chatterbot operations
///
/// This enum encompasses all possible errors that can occur during
/// configuration loading, credential resolution, and calls to the
/// completion endpoint.
#[derive(Error, Debug)]
pub enum ChatterbotError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Completion endpoint errors (request failures, bad statuses, bad payloads)
    #[error("Completion error: {0}")]
    Completion(String),

    /// No bearer credential available for the completion endpoint
    #[error("Missing credential: set api.credential or the CHATTERBOT_API_KEY environment variable")]
    MissingCredential,

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for Chatterbot operations
///
/// This is a convenience alias that uses `anyhow::Error` as the error type,
/// allowing for rich error context and easy error propagation.
pub type Result<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let error = ChatterbotError::Config("invalid format".to_string());
        assert_eq!(error.to_string(), "Configuration error: invalid format");
    }

    #[test]
    fn test_completion_error_display() {
        let error = ChatterbotError::Completion("endpoint returned 500".to_string());
        assert_eq!(error.to_string(), "Completion error: endpoint returned 500");
    }

    #[test]
    fn test_missing_credential_error_display() {
        let error = ChatterbotError::MissingCredential;
        assert!(error.to_string().contains("CHATTERBOT_API_KEY"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: ChatterbotError = io_error.into();
        assert!(matches!(error, ChatterbotError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_str = "{invalid json}";
        let json_error = serde_json::from_str::<serde_json::Value>(json_str).unwrap_err();
        let error: ChatterbotError = json_error.into();
        assert!(matches!(error, ChatterbotError::Serialization(_)));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_str = "invalid: : yaml";
        let yaml_error = serde_yaml::from_str::<serde_yaml::Value>(yaml_str).unwrap_err();
        let error: ChatterbotError = yaml_error.into();
        assert!(matches!(error, ChatterbotError::Yaml(_)));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ChatterbotError>();
    }
}
