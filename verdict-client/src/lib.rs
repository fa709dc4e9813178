//! Verdict HTTP Clients
//!
//! Thin, typed wrappers around the two remote APIs the poller talks to:
//! - [`StatusClient`]: the homework status API (one bounded GET per call)
//! - [`TelegramClient`]: the Telegram Bot API `sendMessage` method
//!
//! Neither client retries; the poll loop decides what happens next.
//!
//! # Example
//!
//! ```no_run
//! use verdict_client::StatusClient;
//! use verdict_core::{Secret, domain::Cursor};
//!
//! #[tokio::main]
//! async fn main() -> verdict_client::Result<()> {
//!     let client = StatusClient::new(
//!         "https://practicum.yandex.ru/api/user_api/homework_statuses/",
//!         Secret::new("token"),
//!     );
//!
//!     let raw = client.fetch(Cursor::new(0)).await?;
//!     println!("{}", raw);
//!     Ok(())
//! }
//! ```

pub mod error;
mod status;
mod telegram;

#[cfg(test)]
mod test_server;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use status::StatusClient;
pub use telegram::{TELEGRAM_API_URL, TelegramClient};

use reqwest::Client;
use std::time::Duration;
use verdict_core::domain::notification::truncate_chars;

/// Default upper bound for a single request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Longest error body kept in [`ClientError::ApiStatus`], in characters
pub const MAX_ERROR_BODY_CHARS: usize = 1000;

/// Builds the shared HTTP client with a request timeout
pub fn http_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(ClientError::from)
}

/// Reads the body of a failed response and turns it into an error
///
/// Error pages can be arbitrarily large; the body is cut to
/// [`MAX_ERROR_BODY_CHARS`].
async fn status_error(response: reqwest::Response) -> ClientError {
    let status = response.status();
    let body = response
        .text()
        .await
        .map(|text| truncate_chars(&text, MAX_ERROR_BODY_CHARS))
        .unwrap_or_else(|_| "<unreadable body>".to_string());

    ClientError::api_status(
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown"),
        body,
    )
}
