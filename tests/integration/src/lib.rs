//! Integration test utilities for the anonbox server
//!
//! Provides helpers for running end-to-end tests against the REST API
//! with in-memory store doubles, so tests need neither a database nor
//! network access.

pub mod fixtures;

pub use fixtures::*;
pub use helpers::*;
