//! Message repository
//!
//! Delivers notification texts to the configured chat.

use async_trait::async_trait;
use verdict_client::{Result, TelegramClient};

/// Repository trait for outgoing notifications
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Sends one text message to the configured chat
    async fn send_message(&self, text: &str) -> Result<()>;
}

/// Telegram implementation of MessageRepository
pub struct TelegramMessageRepository {
    client: TelegramClient,
    chat_id: String,
}

impl TelegramMessageRepository {
    /// Creates a new Telegram message repository
    ///
    /// # Arguments
    /// * `client` - Bot API client
    /// * `chat_id` - Chat that receives every message
    pub fn new(client: TelegramClient, chat_id: String) -> Self {
        Self { client, chat_id }
    }
}

#[async_trait]
impl MessageRepository for TelegramMessageRepository {
    async fn send_message(&self, text: &str) -> Result<()> {
        self.client.send_message(&self.chat_id, text).await
    }
}
