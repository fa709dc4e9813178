//! Notification service
//!
//! Delivers a text message to the configured chat. Delivery failures are
//! logged here and reported as `false`; they never reach the poll loop
//! as errors.

use async_trait::async_trait;
use tracing::{error, info};
use verdict_client::TelegramClient;

/// Service trait for delivering user-facing messages
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Makes one delivery attempt
    ///
    /// # Returns
    /// `true` if the messenger accepted the message
    async fn send(&self, message: &str) -> bool;
}

/// Telegram implementation of Notifier
pub struct TelegramNotifier {
    client: TelegramClient,
}

impl TelegramNotifier {
    pub fn new(client: TelegramClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, message: &str) -> bool {
        info!("Attempting to send notification");

        match self.client.send_message(message).await {
            Ok(()) => {
                info!("Notification sent");
                true
            }
            Err(e) => {
                error!("Failed to send notification: {}", e);
                false
            }
        }
    }
}
