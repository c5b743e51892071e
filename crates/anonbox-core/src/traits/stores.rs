//! Store traits (ports) - narrow interfaces over the two external services
//!
//! The domain layer defines what it needs; the infrastructure crates provide
//! the implementations. Keeping both services behind traits lets the
//! submission pipeline run against test doubles without network access.

use async_trait::async_trait;

use crate::entities::{MessageRecord, NewMessage};
use crate::error::DomainError;

/// Result type for store operations
pub type StoreResult<T> = Result<T, DomainError>;

/// Remote blob store: push one file's bytes, get back a public fetch URL.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Store the bytes under a derived object name and return the public URL.
    ///
    /// Any failure (missing credentials, transport error, timeout, store
    /// rejection) surfaces as `DomainError::UploadFailed` with the
    /// underlying message preserved.
    async fn put(&self, bytes: &[u8], original_name: &str, mime_type: &str)
        -> StoreResult<String>;
}

/// Document store for message records: add, ordered query, delete-by-id.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Persist a new message; the store assigns `id` and `created_at`.
    async fn add(&self, message: &NewMessage) -> StoreResult<MessageRecord>;

    /// Up to `limit` records ordered by `created_at` descending.
    async fn list_recent(&self, limit: i64) -> StoreResult<Vec<MessageRecord>>;

    /// Every record, for full-scan aggregation.
    async fn fetch_all(&self) -> StoreResult<Vec<MessageRecord>>;

    /// Remove a record if present. Idempotent: absence is not an error.
    async fn delete(&self, id: &str) -> StoreResult<()>;
}
