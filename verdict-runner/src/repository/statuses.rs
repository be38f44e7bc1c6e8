//! Status repository
//!
//! Fetches homework status payloads from the status API.

use async_trait::async_trait;
use serde_json::Value;
use verdict_client::{PracticumClient, Result};

/// Repository trait for homework status queries
#[async_trait]
pub trait StatusRepository: Send + Sync {
    /// Fetches statuses changed since `from_date`
    ///
    /// Returns the decoded payload without checking its shape.
    async fn fetch_status(&self, from_date: i64) -> Result<Value>;
}

/// HTTP implementation of StatusRepository
pub struct HttpStatusRepository {
    client: PracticumClient,
}

impl HttpStatusRepository {
    /// Creates a new HTTP status repository
    pub fn new(client: PracticumClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StatusRepository for HttpStatusRepository {
    async fn fetch_status(&self, from_date: i64) -> Result<Value> {
        self.client.fetch_status(from_date).await
    }
}
