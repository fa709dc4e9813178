//! Telegram Bot API endpoint

use reqwest::{Client, Request};
use tracing::info;
use verdict_core::Secret;
use verdict_core::dto::telegram::{BotApiResponse, SendMessage};

use crate::error::{ClientError, Result};
use crate::status_error;

/// Default Bot API base URL
pub const TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Client that posts text messages to a single Telegram chat
#[derive(Debug, Clone)]
pub struct TelegramClient {
    api_base: String,
    bot_token: Secret,
    chat_id: Secret,
    client: Client,
}

impl TelegramClient {
    /// Create a Telegram client against the public Bot API
    pub fn new(bot_token: Secret, chat_id: Secret) -> Self {
        Self::with_client(TELEGRAM_API_URL, bot_token, chat_id, Client::new())
    }

    /// Create a Telegram client with a custom API base and reqwest Client
    pub fn with_client(
        api_base: impl Into<String>,
        bot_token: Secret,
        chat_id: Secret,
        client: Client,
    ) -> Self {
        let api_base = api_base.into();
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            bot_token,
            chat_id,
            client,
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Send `text` to the configured chat
    ///
    /// Makes exactly one attempt. Succeeds only if the Bot API answers
    /// with a 2xx status and `"ok": true`.
    pub async fn send_message(&self, text: &str) -> Result<()> {
        info!("Sending message to chat {}", self.chat_id);

        let request = self.request(text)?;
        // The request URL embeds the bot token
        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| ClientError::RequestFailed(e.without_url()))?;

        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        let envelope: BotApiResponse = response.json().await.map_err(|e| {
            ClientError::ParseError(format!(
                "Failed to parse Bot API response: {}",
                e.without_url()
            ))
        })?;

        if !envelope.ok {
            return Err(ClientError::Rejected(
                envelope
                    .description
                    .unwrap_or_else(|| "no description".to_string()),
            ));
        }

        Ok(())
    }

    fn request(&self, text: &str) -> Result<Request> {
        let url = format!(
            "{}/bot{}/sendMessage",
            self.api_base,
            self.bot_token.expose()
        );

        self.client
            .post(&url)
            .json(&SendMessage {
                chat_id: self.chat_id.expose(),
                text,
            })
            .build()
            .map_err(|e| ClientError::RequestFailed(e.without_url()))
    }
}
