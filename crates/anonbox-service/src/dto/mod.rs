//! Data transfer objects for the service layer

mod requests;
mod responses;

pub use requests::{ClientMeta, IncomingFile, NewSubmission};
pub use responses::{CategoryCounts, StatsResponse, SubmitReceipt};
