//! Error types for the metrics client.

use thiserror::Error;

/// Result type for metrics client operations.
pub type Result<T> = std::result::Result<T, MetricsError>;

/// Metrics client errors.
#[derive(Debug, Error)]
pub enum MetricsError {
    /// Network error (connection failed, timeout, body could not be read)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// API error (non-2xx response)
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Parse error (invalid JSON, unexpected response format)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl MetricsError {
    /// HTTP status of an API error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            MetricsError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
