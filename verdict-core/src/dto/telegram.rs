//! Telegram Bot API DTOs

use serde::{Deserialize, Serialize};

/// Body of a `sendMessage` call
#[derive(Debug, Clone, Serialize)]
pub struct SendMessage<'a> {
    pub chat_id: &'a str,
    pub text: &'a str,
}

/// Envelope every Bot API method responds with
#[derive(Debug, Clone, Deserialize)]
pub struct BotApiResponse {
    pub ok: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub error_code: Option<i64>,
}
