//! Service layer

mod admin;
mod context;
mod error;
mod rate_limit;
mod submission;

pub use admin::{AdminService, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use rate_limit::{FixedWindowLimiter, RateDecision};
pub use submission::SubmissionService;
