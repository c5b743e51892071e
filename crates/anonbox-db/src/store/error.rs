//! Error handling utilities for the store layer

use anonbox_core::DomainError;
use sqlx::Error as SqlxError;

/// Convert a SQLx error into the domain's persistence error
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::StorageError(e.to_string())
}
