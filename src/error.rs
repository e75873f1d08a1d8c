//! Error types for the contact book.
//!
//! Looking up, updating or deleting an unknown contact is not an error: those
//! outcomes are reported through `Option` and `bool` by the service. The types
//! here cover the layers around the service (configuration and the MCP server).

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Errors raised while serving the contact book to external callers.
#[derive(Error, Debug)]
pub enum ContactBookError {
    /// Failed to render a response as JSON
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The MCP transport failed to start or stopped unexpectedly
    #[error("Server transport error: {0}")]
    Transport(String),
}

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with ContactBookError
pub type ContactBookResult<T> = Result<T, ContactBookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::InvalidValue {
            var: "CONTACT_BOOK_SEED_DEMO".to_string(),
            reason: "Must be true or false".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for CONTACT_BOOK_SEED_DEMO: Must be true or false"
        );

        let err = ContactBookError::Transport("stdin closed".to_string());
        assert_eq!(err.to_string(), "Server transport error: stdin closed");
    }

    #[test]
    fn test_json_error_conversion() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: ContactBookError = parse_err.into();
        assert!(err.to_string().starts_with("JSON serialization error"));
    }
}
