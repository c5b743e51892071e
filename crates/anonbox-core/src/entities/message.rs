//! Message entities - the durable record and its pre-persistence form

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{format_file_size, MediaCategory};

/// A successfully uploaded attachment, embedded in its message record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    /// Absolute URL at the remote blob store; immutable once set
    pub url: String,
    pub original_name: String,
    pub mime_type: String,
    pub size_bytes: u64,
    /// Human-formatted size, derived from `size_bytes`
    pub size_display: String,
    /// Derived from `mime_type` at construction
    pub category: MediaCategory,
}

impl Attachment {
    /// Create an Attachment, deriving the display size and category
    pub fn new(
        url: String,
        original_name: String,
        mime_type: String,
        size_bytes: u64,
    ) -> Self {
        let size_display = format_file_size(size_bytes);
        let category = MediaCategory::from_mime(&mime_type);
        Self {
            url,
            original_name,
            mime_type,
            size_bytes,
            size_display,
            category,
        }
    }

    #[inline]
    pub fn is_image(&self) -> bool {
        self.category == MediaCategory::Image
    }

    #[inline]
    pub fn is_video(&self) -> bool {
        self.category == MediaCategory::Video
    }
}

/// A validated message ready to be persisted.
///
/// `attachments` holds only the uploads that succeeded, in request order
/// with failures skipped in place. The counts and flags the store persists
/// are derived from it, never supplied independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    /// Trimmed message text; may be empty only when attachments exist
    pub text: String,
    pub attachments: Vec<Attachment>,
    /// Client-local wall-clock timestamp at a fixed +07:00 offset
    pub submitted_at: String,
    pub client_ip: String,
    pub client_agent: String,
}

impl NewMessage {
    #[inline]
    pub fn attachment_count(&self) -> usize {
        self.attachments.len()
    }

    #[inline]
    pub fn has_attachments(&self) -> bool {
        !self.attachments.is_empty()
    }
}

/// The persisted message record, as read back from the document store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageRecord {
    /// Opaque identifier assigned by the store on creation
    pub id: String,
    pub text: String,
    pub attachments: Vec<Attachment>,
    pub attachment_count: u32,
    pub submitted_at: String,
    /// Server-assigned write timestamp; listing sort key (newest first)
    pub created_at: DateTime<Utc>,
    pub client_ip: String,
    pub client_agent: String,
    pub has_attachments: bool,
}

impl MessageRecord {
    /// Whether at least one attachment falls in the given category
    pub fn matches_category(&self, category: MediaCategory) -> bool {
        self.attachments.iter().any(|a| a.category == category)
    }
}
