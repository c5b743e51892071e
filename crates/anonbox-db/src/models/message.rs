//! Message database model

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use anonbox_core::Attachment;

/// Database model for the messages table
#[derive(Debug, Clone, FromRow)]
pub struct MessageModel {
    pub id: Uuid,
    pub text: String,
    pub attachments: Json<Vec<Attachment>>,
    pub attachment_count: i32,
    pub submitted_at: String,
    pub created_at: DateTime<Utc>,
    pub client_ip: String,
    pub client_agent: String,
    pub has_attachments: bool,
}

impl MessageModel {
    /// Check if the stored derived fields are consistent with the payload
    #[inline]
    pub fn is_consistent(&self) -> bool {
        self.attachment_count as usize == self.attachments.0.len()
            && self.has_attachments == !self.attachments.0.is_empty()
    }
}

/// Store-assigned values returned on insert
#[derive(Debug, Clone, FromRow)]
pub struct InsertedRow {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
}
