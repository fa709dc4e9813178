//! Error types for the Verdict HTTP clients

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when calling the status or messenger APIs
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// API answered with an unexpected status code
    #[error("API error (status {status} {reason}): {body}")]
    ApiStatus {
        /// HTTP status code
        status: u16,
        /// Canonical reason phrase for the status code
        reason: String,
        /// Response body as text
        body: String,
    },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// The messenger accepted the request but reported a failure
    #[error("Message rejected: {0}")]
    Rejected(String),
}

impl ClientError {
    /// Create an API status error from code, reason and body
    pub fn api_status(status: u16, reason: impl Into<String>, body: impl Into<String>) -> Self {
        Self::ApiStatus {
            status,
            reason: reason.into(),
            body: body.into(),
        }
    }
}
