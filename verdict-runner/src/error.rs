//! Poll loop error taxonomy
//!
//! Every failure the runner can observe is one of these variants, and
//! every variant maps to exactly one [`ErrorPolicy`].

use thiserror::Error;
use verdict_client::ClientError;
use verdict_core::ValidationError;

/// Errors raised at startup or during a poll cycle
#[derive(Debug, Error)]
pub enum PollError {
    /// One or more required credentials are absent or blank
    #[error("missing required credentials: {}", .names.join(", "))]
    MissingCredential { names: Vec<&'static str> },

    /// The status API call failed (transport, status code, or body)
    #[error("{0}")]
    Fetch(#[from] ClientError),

    /// The status API response or its newest record was rejected
    #[error("{0}")]
    Validation(#[from] ValidationError),
}

/// What the poll loop does with an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Stop the process
    Fatal,
    /// Log, then report to the chat unless the same text was already sent
    Notify,
}

impl PollError {
    pub fn policy(&self) -> ErrorPolicy {
        match self {
            Self::MissingCredential { .. } => ErrorPolicy::Fatal,
            Self::Fetch(_) | Self::Validation(_) => ErrorPolicy::Notify,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policies() {
        let missing = PollError::MissingCredential {
            names: vec!["PRACTICUM_TOKEN", "TELEGRAM_CHAT_ID"],
        };
        assert_eq!(missing.policy(), ErrorPolicy::Fatal);
        assert_eq!(
            missing.to_string(),
            "missing required credentials: PRACTICUM_TOKEN, TELEGRAM_CHAT_ID"
        );

        let fetch = PollError::from(ClientError::api_status(500, "Internal Server Error", ""));
        assert_eq!(fetch.policy(), ErrorPolicy::Notify);

        let validation = PollError::from(ValidationError::NotASequence);
        assert_eq!(validation.policy(), ErrorPolicy::Notify);
        assert_eq!(
            validation.to_string(),
            "field `homeworks` in API response is not a list"
        );
    }
}
