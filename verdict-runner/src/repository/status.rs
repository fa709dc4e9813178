//! Status repository
//!
//! Fetches the raw homework status document for a given cursor.

use async_trait::async_trait;
use serde_json::Value;
use verdict_client::{Result, StatusClient};
use verdict_core::domain::Cursor;

/// Repository trait for the homework status API
#[async_trait]
pub trait StatusRepository: Send + Sync {
    /// Fetches homework statuses updated since `cursor`
    ///
    /// Returns the untyped response body; one request, no retries.
    async fn fetch(&self, cursor: Cursor) -> Result<Value>;
}

/// HTTP implementation of StatusRepository
pub struct HttpStatusRepository {
    client: StatusClient,
}

impl HttpStatusRepository {
    pub fn new(client: StatusClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StatusRepository for HttpStatusRepository {
    async fn fetch(&self, cursor: Cursor) -> Result<Value> {
        self.client.fetch(cursor).await
    }
}
