//! In-memory repositories for tests.

use async_trait::async_trait;
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use verdict_client::{ClientError, Result};

use crate::repository::{MessageRepository, StatusRepository};

/// Replays queued responses and records every requested cursor.
///
/// Once the queue is empty every fetch returns an empty homework list.
#[derive(Default)]
pub struct FakeStatusRepository {
    responses: Mutex<VecDeque<Result<Value>>>,
    requested: Mutex<Vec<i64>>,
}

impl FakeStatusRepository {
    pub fn new(responses: impl IntoIterator<Item = Result<Value>>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn requested(&self) -> Vec<i64> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl StatusRepository for FakeStatusRepository {
    async fn fetch_status(&self, from_date: i64) -> Result<Value> {
        self.requested.lock().unwrap().push(from_date);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(json!({ "homeworks": [] })))
    }
}

/// Records delivered texts; can be switched into a failing mode.
#[derive(Default)]
pub struct FakeMessageRepository {
    failing: AtomicBool,
    attempts: AtomicUsize,
    sent: Mutex<Vec<String>>,
}

impl FakeMessageRepository {
    pub fn delivering() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let repo = Self::default();
        repo.set_failing(true);
        repo
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessageRepository for FakeMessageRepository {
    async fn send_message(&self, text: &str) -> Result<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);

        if self.failing.load(Ordering::SeqCst) {
            return Err(ClientError::ServerReported {
                message: "Bad Request: chat not found".to_string(),
            });
        }

        self.sent.lock().unwrap().push(text.to_string());
        Ok(())
    }
}
