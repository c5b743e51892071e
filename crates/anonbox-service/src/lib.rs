//! # anonbox-service
//!
//! Application layer: the submission pipeline, admin/query services, and
//! the per-client rate limiter, all wired through an explicit
//! `ServiceContext` so external services can be replaced by test doubles.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    CategoryCounts, ClientMeta, IncomingFile, NewSubmission, StatsResponse, SubmitReceipt,
};
pub use services::{
    AdminService, FixedWindowLimiter, RateDecision, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult, SubmissionService, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT,
};
