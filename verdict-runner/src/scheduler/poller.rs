//! Status poller
//!
//! Each cycle runs Fetch, Validate, Select, Notify and Advance in order, then
//! sleeps for the configured period. Cycles never overlap, and the cursor and
//! the last error notification are owned by the poller alone.

use std::sync::Arc;
use thiserror::Error;
use tokio::time::{self, Duration};
use tracing::{debug, error, info, warn};
use verdict_client::ClientError;
use verdict_core::{Cursor, ParseError, ShapeError, current_date, parse_status, validate_response};

use crate::repository::StatusRepository;
use crate::service::NotificationService;

/// Prefix of every error notification
pub const ERROR_PREFIX: &str = "Сбой в работе программы.";

/// Anything that can go wrong inside a single cycle; none of it is fatal
#[derive(Debug, Error)]
pub enum CycleError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl CycleError {
    /// Short label used as a structured log field
    pub fn kind(&self) -> &'static str {
        match self {
            CycleError::Client(ClientError::Connection { .. }) => "connection",
            CycleError::Client(ClientError::HttpStatus { .. }) => "http_status",
            CycleError::Client(ClientError::Decode(_)) => "decode",
            CycleError::Client(ClientError::ServerReported { .. }) => "server_reported",
            CycleError::Client(ClientError::InvalidRequest(_)) => "invalid_request",
            CycleError::Shape(_) => "shape",
            CycleError::Parse(ParseError::MissingField(_)) => "missing_field",
            CycleError::Parse(ParseError::UnknownStatus(_)) => "unknown_status",
        }
    }

    /// Text sent to the chat for this failure
    pub fn diagnostic(&self) -> String {
        format!("{} {}", ERROR_PREFIX, self)
    }
}

/// What a cycle that finished without error did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The status API reported no homework
    NoChanges,
    /// The latest status was delivered and the cursor advanced
    Delivered,
    /// The latest status could not be delivered; the cursor stays put
    Undelivered,
}

/// Poller that reports homework status changes forever
pub struct StatusPoller {
    poll_interval: Duration,
    statuses: Arc<dyn StatusRepository>,
    notifier: Arc<dyn NotificationService>,
    cursor: Cursor,
    last_notified: Option<String>,
}

impl StatusPoller {
    /// Creates a new status poller
    ///
    /// # Arguments
    /// * `poll_interval` - Pause after every cycle
    /// * `statuses` - Source of status payloads
    /// * `notifier` - Sink for user-facing messages
    /// * `cursor` - Lower bound of the first query window
    pub fn new(
        poll_interval: Duration,
        statuses: Arc<dyn StatusRepository>,
        notifier: Arc<dyn NotificationService>,
        cursor: Cursor,
    ) -> Self {
        Self {
            poll_interval,
            statuses,
            notifier,
            cursor,
            last_notified: None,
        }
    }

    /// Current query cursor
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Starts the polling loop
    ///
    /// Never returns; the process is stopped from outside.
    pub async fn run(&mut self) {
        info!(
            "Starting status poller (interval: {:?}, from_date: {})",
            self.poll_interval,
            self.cursor.value()
        );

        loop {
            if let Ok(CycleOutcome::Delivered) = self.run_cycle().await {
                info!("Status change reported, next from_date={}", self.cursor().value());
            }

            time::sleep(self.poll_interval).await;
        }
    }

    /// Runs one cycle, including the error path
    ///
    /// A failed cycle has already been logged and, if new, notified when
    /// this returns; the error is handed back for inspection only.
    pub async fn run_cycle(&mut self) -> Result<CycleOutcome, CycleError> {
        let result = self.poll_once().await;

        match &result {
            Ok(outcome) => {
                debug!("Cycle finished: {:?}", outcome);
                self.last_notified = None;
            }
            Err(err) => self.report_error(err).await,
        }

        result
    }

    /// Fetch, Validate, Select, Notify and Advance
    async fn poll_once(&mut self) -> Result<CycleOutcome, CycleError> {
        debug!("Polling homework statuses from_date={}", self.cursor.value());

        let payload = self.statuses.fetch_status(self.cursor.value()).await?;
        let homeworks = validate_response(&payload)?;

        let Some(latest) = homeworks.first() else {
            debug!("No status changes");
            return Ok(CycleOutcome::NoChanges);
        };

        if homeworks.len() > 1 {
            debug!(
                "{} older homework update(s) not reported this cycle",
                homeworks.len() - 1
            );
        }

        let message = parse_status(latest)?;

        if !self.notifier.notify(&message).await {
            warn!("Status change was not delivered, keeping from_date={}", self.cursor.value());
            return Ok(CycleOutcome::Undelivered);
        }

        if !self.cursor.advance(current_date(&payload)) {
            debug!("Response carried no new current_date, cursor unchanged");
        }

        Ok(CycleOutcome::Delivered)
    }

    /// Logs a failed cycle and notifies about it unless it repeats the last one
    async fn report_error(&mut self, err: &CycleError) {
        let message = err.diagnostic();
        error!(kind = err.kind(), "{}", message);

        if self.last_notified.as_deref() == Some(message.as_str()) {
            debug!("Same failure as last cycle, notification suppressed");
            return;
        }

        if !self.notifier.notify(&message).await {
            warn!("Failure notification was not delivered");
        }

        self.last_notified = Some(message);
    }
}
