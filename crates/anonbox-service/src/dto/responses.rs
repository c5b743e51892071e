//! Response DTOs for the service layer
//!
//! All response DTOs serialize with camelCase field names for JSON output.

use serde::Serialize;

/// Outcome of a submission: the stored record's id plus upload accounting,
/// so callers can detect partial attachment loss on an otherwise
/// successful request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReceipt {
    pub id: String,
    pub files_uploaded: usize,
    pub files_total: usize,
}

/// Full-scan aggregation over all stored messages
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_messages: usize,
    pub messages_with_attachments: usize,
    pub messages_text_only: usize,
    pub total_attachments: usize,
    /// Human-formatted sum of attachment sizes
    pub total_size: String,
    pub attachments_by_category: CategoryCounts,
}

/// Attachment counts per category
#[derive(Debug, Clone, Default, Serialize)]
pub struct CategoryCounts {
    pub image: usize,
    pub video: usize,
    pub other: usize,
}
