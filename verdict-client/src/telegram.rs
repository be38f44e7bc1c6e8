//! Telegram Bot API

use crate::error::{ClientError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// HTTP client for the Telegram Bot API
#[derive(Clone)]
pub struct TelegramClient {
    /// Bot API base URL (e.g., "https://api.telegram.org")
    api_url: String,
    /// Bot token, part of every method URL
    token: String,
    /// HTTP client instance
    client: Client,
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct BotApiReply {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

impl TelegramClient {
    /// Create a new Bot API client
    ///
    /// # Arguments
    /// * `api_url` - Bot API base URL
    /// * `token` - Bot token issued by BotFather
    pub fn new(api_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(api_url, token, Client::new())
    }

    /// Create a new Bot API client with a custom HTTP client
    pub fn with_client(api_url: impl Into<String>, token: impl Into<String>, client: Client) -> Self {
        let api_url = api_url.into();
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.into(),
            client,
        }
    }

    /// Get the Bot API base URL
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Send a plain text message to a chat
    ///
    /// # Arguments
    /// * `chat_id` - Numeric chat id or `@channelusername`
    /// * `text` - Message text
    pub async fn send_message(&self, chat_id: &str, text: &str) -> Result<()> {
        if text.is_empty() {
            return Err(ClientError::InvalidRequest(
                "message text cannot be empty".to_string(),
            ));
        }

        let url = format!("{}/bot{}/sendMessage", self.api_url, self.token);
        let endpoint = format!("{}/sendMessage", self.api_url);

        debug!("Sending message to chat {}", chat_id);

        let response = self
            .client
            .post(&url)
            .json(&SendMessageRequest { chat_id, text })
            .send()
            .await
            .map_err(|e| ClientError::connection(&endpoint, e))?;

        let reply: BotApiReply = crate::handle_response(&endpoint, response).await?;
        check_reply(reply)
    }
}

// Keeps the bot token out of debug output.
impl std::fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramClient")
            .field("api_url", &self.api_url)
            .finish_non_exhaustive()
    }
}

fn check_reply(reply: BotApiReply) -> Result<()> {
    if reply.ok {
        return Ok(());
    }

    Err(ClientError::ServerReported {
        message: reply
            .description
            .unwrap_or_else(|| "Bot API returned ok=false".to_string()),
    })
}
