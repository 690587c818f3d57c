//! Error types for tagchat.

use thiserror::Error;

/// Common error type for tagchat.
///
/// User input never produces one of these; bad commands are answered by the
/// dispatcher instead. These cover startup concerns such as configuration and
/// seed data.
#[derive(Error, Debug)]
pub enum TagChatError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Validation error for configuration values.
    #[error("validation error: {0}")]
    Validation(String),

    /// Seed tag file error.
    #[error("seed error: {0}")]
    Seed(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for TagChatError {
    fn from(e: serde_json::Error) -> Self {
        TagChatError::Serialization(e.to_string())
    }
}

/// Result type alias for tagchat operations.
pub type Result<T> = std::result::Result<T, TagChatError>;
