//! Error types for the data auditor

use crate::store::StoreKind;
use thiserror::Error;

/// Result type alias for auditor operations
pub type AuditorResult<T> = Result<T, AuditorError>;

/// Main error type for the data auditor
#[derive(Error, Debug, Clone)]
pub enum AuditorError {
    /// Configuration related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Backing-store failures (connectivity, rejected queries)
    ///
    /// The display form carries the store-type prefix so a caller can
    /// tell which backing store produced the failure.
    #[error("{}: {message}", .kind.error_prefix())]
    Store { kind: StoreKind, message: String },

    /// Tool execution errors
    #[error("Tool error: {tool_name}: {message}")]
    Tool { tool_name: String, message: String },

    /// Invalid input errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(String),

    /// Generic error with context
    #[error("Error: {0}")]
    Other(String),
}

impl AuditorError {
    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a new store error
    pub fn store(kind: StoreKind, message: impl Into<String>) -> Self {
        Self::Store {
            kind,
            message: message.into(),
        }
    }

    /// Create a new tool error
    pub fn tool(tool_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Tool {
            tool_name: tool_name.into(),
            message: message.into(),
        }
    }

    /// Create a new invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// The bare store message, without the store-type prefix.
    ///
    /// Falls back to the display form for non-store errors.
    pub fn store_message(&self) -> String {
        match self {
            Self::Store { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<anyhow::Error> for AuditorError {
    fn from(error: anyhow::Error) -> Self {
        Self::Other(error.to_string())
    }
}

impl From<std::io::Error> for AuditorError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error.to_string())
    }
}

impl From<serde_json::Error> for AuditorError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error.to_string())
    }
}

impl From<reqwest::Error> for AuditorError {
    fn from(error: reqwest::Error) -> Self {
        Self::Http(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_display_carries_prefix() {
        let err = AuditorError::store(StoreKind::Cosmos, "connection refused");
        assert_eq!(err.to_string(), "CosmosDB Error: connection refused");

        let err = AuditorError::store(StoreKind::Sqlite, "no such table: users");
        assert_eq!(err.to_string(), "Database Error: no such table: users");
    }

    #[test]
    fn store_message_strips_prefix() {
        let err = AuditorError::store(StoreKind::Cosmos, "timeout");
        assert_eq!(err.store_message(), "timeout");

        let err = AuditorError::config("missing COSMOS_ENDPOINT");
        assert_eq!(
            err.store_message(),
            "Configuration error: missing COSMOS_ENDPOINT"
        );
    }
}
