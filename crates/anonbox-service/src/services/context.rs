//! Service context - dependency container for services
//!
//! Holds the store handles and the rate limiter. Built explicitly at
//! startup (or by tests, with doubles) and passed to every service; there
//! is no ambient global state.

use std::sync::Arc;

use anonbox_core::{BlobStore, MessageStore};

use super::error::ServiceError;
use super::rate_limit::FixedWindowLimiter;

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    message_store: Arc<dyn MessageStore>,
    blob_store: Arc<dyn BlobStore>,
    rate_limiter: Arc<FixedWindowLimiter>,
}

impl ServiceContext {
    /// Get the message store
    pub fn message_store(&self) -> &dyn MessageStore {
        self.message_store.as_ref()
    }

    /// Get the blob store
    pub fn blob_store(&self) -> &dyn BlobStore {
        self.blob_store.as_ref()
    }

    /// Get the submission rate limiter
    pub fn rate_limiter(&self) -> &FixedWindowLimiter {
        self.rate_limiter.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("rate_limiter", &self.rate_limiter)
            .finish()
    }
}

/// Builder for ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    message_store: Option<Arc<dyn MessageStore>>,
    blob_store: Option<Arc<dyn BlobStore>>,
    rate_limiter: Option<Arc<FixedWindowLimiter>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message_store(mut self, store: Arc<dyn MessageStore>) -> Self {
        self.message_store = Some(store);
        self
    }

    pub fn blob_store(mut self, store: Arc<dyn BlobStore>) -> Self {
        self.blob_store = Some(store);
        self
    }

    pub fn rate_limiter(mut self, limiter: Arc<FixedWindowLimiter>) -> Self {
        self.rate_limiter = Some(limiter);
        self
    }

    /// Build the context; every dependency is required
    pub fn build(self) -> Result<ServiceContext, ServiceError> {
        Ok(ServiceContext {
            message_store: self
                .message_store
                .ok_or_else(|| ServiceError::internal("message store is required"))?,
            blob_store: self
                .blob_store
                .ok_or_else(|| ServiceError::internal("blob store is required"))?,
            rate_limiter: self
                .rate_limiter
                .ok_or_else(|| ServiceError::internal("rate limiter is required"))?,
        })
    }
}
