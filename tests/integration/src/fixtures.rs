//! Test fixtures and response shapes
//!
//! Deserialization targets for the API's JSON envelopes plus small file
//! payload generators.

use serde::Deserialize;

use crate::FilePart;

/// Submission response envelope
#[derive(Debug, Deserialize)]
pub struct SendEnvelope {
    pub success: bool,
    pub message: String,
    pub data: SendData,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendData {
    pub id: String,
    pub files_uploaded: usize,
    pub files_total: usize,
}

/// Listing response envelope
#[derive(Debug, Deserialize)]
pub struct ListEnvelope {
    pub success: bool,
    pub count: usize,
    pub filter: String,
    pub data: Vec<MessageJson>,
}

/// A stored message as it appears on the wire
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageJson {
    pub id: String,
    pub text: String,
    pub attachments: Vec<AttachmentJson>,
    pub attachment_count: u32,
    pub submitted_at: String,
    pub client_ip: String,
    pub client_agent: String,
    pub has_attachments: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentJson {
    pub url: String,
    pub original_name: String,
    pub mime_type: String,
    pub size_bytes: u64,
    pub size_display: String,
    pub category: String,
}

/// Deletion response envelope
#[derive(Debug, Deserialize)]
pub struct DeleteEnvelope {
    pub success: bool,
    pub message: String,
}

/// Statistics response envelope
#[derive(Debug, Deserialize)]
pub struct StatsEnvelope {
    pub success: bool,
    pub data: StatsJson,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsJson {
    pub total_messages: usize,
    pub messages_with_attachments: usize,
    pub messages_text_only: usize,
    pub total_attachments: usize,
    pub total_size: String,
    pub attachments_by_category: CategoryCountsJson,
}

#[derive(Debug, Deserialize)]
pub struct CategoryCountsJson {
    pub image: usize,
    pub video: usize,
    pub other: usize,
}

/// Error response envelope
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    pub success: bool,
    pub message: String,
    pub retry_after: Option<u64>,
}

/// Health response shape
#[derive(Debug, Deserialize)]
pub struct HealthJson {
    pub status: String,
    pub timestamp: String,
    pub uptime: u64,
}

/// A small PNG-typed payload
pub fn png_file(name: &'static str) -> FilePart {
    FilePart {
        name,
        mime: "image/png",
        bytes: vec![0x89, 0x50, 0x4e, 0x47, 0, 0, 0, 0],
    }
}

/// A small MP4-typed payload
pub fn mp4_file(name: &'static str) -> FilePart {
    FilePart {
        name,
        mime: "video/mp4",
        bytes: vec![0u8; 64],
    }
}

/// A small PDF-typed payload
pub fn pdf_file(name: &'static str) -> FilePart {
    FilePart {
        name,
        mime: "application/pdf",
        bytes: b"%PDF-1.4 test".to_vec(),
    }
}

/// A payload with a MIME type outside the allow-list
pub fn exe_file(name: &'static str) -> FilePart {
    FilePart {
        name,
        mime: "application/x-msdownload",
        bytes: vec![0x4d, 0x5a],
    }
}
