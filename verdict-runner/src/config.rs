//! Runner configuration
//!
//! Credentials, remote endpoints and the polling schedule, loaded from
//! environment variables with defaults for everything but credentials.

use std::time::Duration;
use tracing::error;
use verdict_core::Secret;
use verdict_core::domain::Cursor;

use crate::error::PollError;

/// Default homework status endpoint
pub const DEFAULT_STATUS_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Default pause between poll cycles (10 minutes)
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(600);

/// The three tokens the runner cannot start without
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Status API OAuth token (`PRACTICUM_TOKEN`)
    pub practicum_token: Secret,
    /// Telegram bot token (`TELEGRAM_TOKEN`)
    pub telegram_token: Secret,
    /// Destination chat identifier (`TELEGRAM_CHAT_ID`)
    pub telegram_chat_id: Secret,
}

impl Credentials {
    /// Checks that every credential is present and non-blank
    ///
    /// Each missing variable is logged on its own line before the
    /// combined error is returned.
    pub fn check(&self) -> Result<(), PollError> {
        let names: Vec<&'static str> = [
            ("PRACTICUM_TOKEN", &self.practicum_token),
            ("TELEGRAM_TOKEN", &self.telegram_token),
            ("TELEGRAM_CHAT_ID", &self.telegram_chat_id),
        ]
        .into_iter()
        .filter(|(_, secret)| secret.is_empty())
        .map(|(name, _)| name)
        .collect();

        if names.is_empty() {
            return Ok(());
        }

        for name in &names {
            error!("Required environment variable {} is not set", name);
        }

        Err(PollError::MissingCredential { names })
    }
}

/// Runner configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,

    /// Homework status API URL
    pub status_endpoint: String,

    /// Telegram Bot API base URL
    pub telegram_api_url: String,

    /// Pause between cycles, identical after success and failure
    pub poll_interval: Duration,

    /// Upper bound for each HTTP request
    pub request_timeout: Duration,

    /// Watermark of the first request
    pub start_cursor: Cursor,
}

impl Config {
    /// Creates a configuration with default endpoints and schedule
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            status_endpoint: DEFAULT_STATUS_ENDPOINT.to_string(),
            telegram_api_url: verdict_client::TELEGRAM_API_URL.to_string(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            request_timeout: verdict_client::DEFAULT_TIMEOUT,
            start_cursor: Cursor::default(),
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - PRACTICUM_TOKEN (required)
    /// - TELEGRAM_TOKEN (required)
    /// - TELEGRAM_CHAT_ID (required)
    /// - STATUS_ENDPOINT (optional, default: Practicum homework statuses)
    /// - TELEGRAM_API_URL (optional, default: https://api.telegram.org)
    /// - POLL_INTERVAL (optional, seconds, default: 600)
    /// - REQUEST_TIMEOUT (optional, seconds, default: 30)
    /// - START_CURSOR (optional, unix seconds, default: 0)
    ///
    /// Missing credentials are loaded as blank and rejected by [`Config::validate`].
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Creates configuration from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let secret = |name: &str| Secret::new(lookup(name).unwrap_or_default());
        let seconds = |name: &str| {
            lookup(name)
                .and_then(|s| s.trim().parse::<u64>().ok())
                .map(Duration::from_secs)
        };

        let mut config = Self::new(Credentials {
            practicum_token: secret("PRACTICUM_TOKEN"),
            telegram_token: secret("TELEGRAM_TOKEN"),
            telegram_chat_id: secret("TELEGRAM_CHAT_ID"),
        });

        if let Some(endpoint) = lookup("STATUS_ENDPOINT") {
            config.status_endpoint = endpoint;
        }

        if let Some(url) = lookup("TELEGRAM_API_URL") {
            config.telegram_api_url = url;
        }

        if let Some(interval) = seconds("POLL_INTERVAL") {
            config.poll_interval = interval;
        }

        if let Some(timeout) = seconds("REQUEST_TIMEOUT") {
            config.request_timeout = timeout;
        }

        if let Some(cursor) = lookup("START_CURSOR").and_then(|s| s.trim().parse::<i64>().ok()) {
            config.start_cursor = Cursor::new(cursor);
        }

        config
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        self.credentials.check()?;

        for (name, url) in [
            ("status_endpoint", &self.status_endpoint),
            ("telegram_api_url", &self.telegram_api_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                anyhow::bail!("{} must start with http:// or https://", name);
            }
        }

        if self.poll_interval.as_secs() == 0 {
            anyhow::bail!("poll_interval must be greater than 0");
        }

        if self.request_timeout.as_secs() == 0 {
            anyhow::bail!("request_timeout must be greater than 0");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    const CREDENTIALS: [(&str, &str); 3] = [
        ("PRACTICUM_TOKEN", "practicum-token"),
        ("TELEGRAM_TOKEN", "123456:telegram-token"),
        ("TELEGRAM_CHAT_ID", "987654321"),
    ];

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&CREDENTIALS));

        assert_eq!(config.status_endpoint, DEFAULT_STATUS_ENDPOINT);
        assert_eq!(config.telegram_api_url, "https://api.telegram.org");
        assert_eq!(config.poll_interval, Duration::from_secs(600));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.start_cursor, Cursor::new(0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let mut vars = CREDENTIALS.to_vec();
        vars.extend([
            ("POLL_INTERVAL", "60"),
            ("REQUEST_TIMEOUT", "5"),
            ("START_CURSOR", "1700000000"),
            ("STATUS_ENDPOINT", "http://localhost:8080/statuses"),
        ]);
        let config = Config::from_lookup(lookup(&vars));

        assert_eq!(config.poll_interval, Duration::from_secs(60));
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.start_cursor, Cursor::new(1_700_000_000));
        assert_eq!(config.status_endpoint, "http://localhost:8080/statuses");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_credentials_are_fatal() {
        let config = Config::from_lookup(lookup(&[
            ("PRACTICUM_TOKEN", "practicum-token"),
            ("TELEGRAM_TOKEN", "  "),
        ]));

        match config.credentials.check() {
            Err(PollError::MissingCredential { names }) => {
                assert_eq!(names, vec!["TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"]);
            }
            other => panic!("expected MissingCredential, got {:?}", other),
        }

        let err = config.validate().unwrap_err();
        assert!(err.downcast_ref::<PollError>().is_some());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::from_lookup(lookup(&CREDENTIALS));

        config.status_endpoint = "not-a-url".to_string();
        assert!(config.validate().is_err());
        config.status_endpoint = DEFAULT_STATUS_ENDPOINT.to_string();

        config.poll_interval = Duration::ZERO;
        assert!(config.validate().is_err());
        config.poll_interval = DEFAULT_POLL_INTERVAL;

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_debug_masks_credentials() {
        let config = Config::from_lookup(lookup(&CREDENTIALS));
        let debug = format!("{:?}", config);

        assert!(!debug.contains("practicum-token"));
        assert!(!debug.contains("telegram-token"));
        assert!(!debug.contains("987654321"));
    }
}
