//! Submission validation - pure shape/size checks, no I/O
//!
//! Rules are ordered and the first failure wins: empty submission, then
//! text length, then the structural file constraints the upload boundary
//! also enforces (count, per-file size, MIME allow-list).

use crate::error::DomainError;

/// Maximum message length after trimming, in characters
pub const MAX_TEXT_CHARS: usize = 5000;

/// Maximum number of files per submission
pub const MAX_FILES: usize = 4;

/// Maximum size of a single file
pub const MAX_FILE_BYTES: u64 = 20 * 1024 * 1024;

/// MIME types accepted at the upload boundary: common image, video,
/// document, and archive formats.
pub const ALLOWED_MIME_TYPES: &[&str] = &[
    // Images
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/webp",
    "image/svg+xml",
    // Videos
    "video/mp4",
    "video/webm",
    "video/quicktime",
    "video/x-msvideo",
    // Documents
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/vnd.ms-excel",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "application/vnd.ms-powerpoint",
    "application/vnd.openxmlformats-officedocument.presentationml.presentation",
    "text/plain",
    // Archives
    "application/zip",
    "application/x-rar-compressed",
];

/// Whether a declared MIME type is on the allow-list
#[must_use]
pub fn is_allowed_mime(mime_type: &str) -> bool {
    ALLOWED_MIME_TYPES.contains(&mime_type)
}

/// Validate the message text, returning the trimmed slice on success.
///
/// Empty-after-trim text is only acceptable when files are attached.
/// Exactly `MAX_TEXT_CHARS` characters is accepted.
pub fn validate_text(text: &str, file_count: usize) -> Result<&str, DomainError> {
    let trimmed = text.trim();
    if trimmed.is_empty() && file_count == 0 {
        return Err(DomainError::EmptySubmission);
    }
    if trimmed.chars().count() > MAX_TEXT_CHARS {
        return Err(DomainError::TextTooLong { max: MAX_TEXT_CHARS });
    }
    Ok(trimmed)
}

/// Reject submissions carrying more than `MAX_FILES` files
pub fn validate_file_count(count: usize) -> Result<(), DomainError> {
    if count > MAX_FILES {
        return Err(DomainError::TooManyFiles { max: MAX_FILES });
    }
    Ok(())
}

/// Validate one candidate file's declared size and MIME type
pub fn validate_file(mime_type: &str, size_bytes: u64) -> Result<(), DomainError> {
    if size_bytes > MAX_FILE_BYTES {
        return Err(DomainError::FileTooLarge {
            max_mib: MAX_FILE_BYTES / (1024 * 1024),
        });
    }
    if !is_allowed_mime(mime_type) {
        return Err(DomainError::InvalidAttachment(mime_type.to_string()));
    }
    Ok(())
}
