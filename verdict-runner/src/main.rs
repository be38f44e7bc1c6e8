//! Verdict Runner
//!
//! A long-lived bot that watches homework review statuses and reports
//! changes to a Telegram chat.
//!
//! Architecture:
//! - Configuration: credentials and settings from the environment
//! - Repositories: HTTP access to the status API and the Bot API
//! - Services: notification delivery that never fails the caller
//! - Scheduler: the poll loop with its error reporting policy
//!
//! The runner refuses to start without all credentials; once running, no
//! per-cycle failure stops it.

mod config;
mod logging;
mod repository;
mod scheduler;
mod service;

#[cfg(test)]
mod test_support;

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{error, info};
use verdict_client::{PracticumClient, TelegramClient};
use verdict_core::Cursor;

use crate::config::Config;
use crate::repository::{HttpStatusRepository, TelegramMessageRepository};
use crate::scheduler::StatusPoller;
use crate::service::StandardNotificationService;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    logging::init(&config.log_file)?;

    info!("Starting Verdict Runner");

    // Start of the first query window
    let cursor = Cursor::new(chrono::Utc::now().timestamp());

    if let Err(e) = config.validate() {
        error!("Refusing to start: {}", e);
        return Err(e.into());
    }

    info!(
        "Loaded configuration: endpoint={}, chat_id={}",
        config.endpoint, config.credentials.channel_id
    );

    let http = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()
        .context("Failed to build HTTP client")?;

    let practicum = PracticumClient::with_client(
        config.endpoint.clone(),
        config.credentials.api_token.clone(),
        http.clone(),
    );
    let telegram = TelegramClient::with_client(
        config.telegram_api_url.clone(),
        config.credentials.messaging_token.clone(),
        http,
    );

    let statuses = Arc::new(HttpStatusRepository::new(practicum));
    let messages = Arc::new(TelegramMessageRepository::new(
        telegram,
        config.credentials.channel_id.clone(),
    ));
    let notifier = Arc::new(StandardNotificationService::new(messages));

    info!("Runner initialized successfully");

    let mut poller = StatusPoller::new(config.poll_interval, statuses, notifier, cursor);
    poller.run().await;

    Ok(())
}
