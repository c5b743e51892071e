//! # anonbox-db
//!
//! Document-store layer implementing the `MessageStore` trait with
//! PostgreSQL via SQLx.
//!
//! The document-store surface (add, ordered query, delete-by-id) maps onto
//! a single `messages` table with a JSONB attachments column, so callers
//! only ever see the trait from `anonbox-core`.

pub mod mappers;
pub mod models;
pub mod pool;
pub mod store;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, DatabaseConfig, PgPool};
pub use store::PgMessageStore;
