//! Notification service
//!
//! Delivers texts through the message repository and turns every delivery
//! failure into a logged `false`, so a messaging outage never stops the
//! poll loop.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error};

use crate::repository::MessageRepository;

/// Service trait for user-facing notifications
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// Attempts to deliver a notification
    ///
    /// # Returns
    /// `true` when the messaging API confirmed delivery
    async fn notify(&self, text: &str) -> bool;
}

/// Standard implementation of NotificationService
pub struct StandardNotificationService {
    messages: Arc<dyn MessageRepository>,
}

impl StandardNotificationService {
    /// Creates a new notification service
    pub fn new(messages: Arc<dyn MessageRepository>) -> Self {
        Self { messages }
    }
}

#[async_trait]
impl NotificationService for StandardNotificationService {
    async fn notify(&self, text: &str) -> bool {
        debug!("Sending notification");

        match self.messages.send_message(text).await {
            Ok(()) => {
                debug!("Notification delivered");
                true
            }
            Err(e) => {
                error!("Failed to deliver notification: {}", e);
                false
            }
        }
    }
}
