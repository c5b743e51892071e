//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Submission Validation Errors
    // =========================================================================
    #[error("Message text is empty and no files were attached")]
    EmptySubmission,

    #[error("Message text is too long: max {max} characters")]
    TextTooLong { max: usize },

    #[error("File type not allowed: {0}")]
    InvalidAttachment(String),

    #[error("File too large: max {max_mib} MiB per file")]
    FileTooLarge { max_mib: u64 },

    #[error("Too many files: max {max} per submission")]
    TooManyFiles { max: usize },

    // =========================================================================
    // External Service Errors
    // =========================================================================
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    // =========================================================================
    // Internal
    // =========================================================================
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptySubmission => "EMPTY_SUBMISSION",
            Self::TextTooLong { .. } => "TEXT_TOO_LONG",
            Self::InvalidAttachment(_) => "INVALID_ATTACHMENT",
            Self::FileTooLarge { .. } => "FILE_TOO_LARGE",
            Self::TooManyFiles { .. } => "TOO_MANY_FILES",
            Self::UploadFailed(_) => "UPLOAD_FAILED",
            Self::StorageError(_) => "STORAGE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether this is a client-input validation error (maps to 400)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptySubmission
                | Self::TextTooLong { .. }
                | Self::InvalidAttachment(_)
                | Self::FileTooLarge { .. }
                | Self::TooManyFiles { .. }
        )
    }

    /// Whether this is a per-file upload failure (recovered locally)
    pub fn is_upload(&self) -> bool {
        matches!(self, Self::UploadFailed(_))
    }

    /// Whether this is a persistence failure (fatal to the request)
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::StorageError(_))
    }
}
