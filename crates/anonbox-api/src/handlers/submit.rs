//! Anonymous submission handler

use anonbox_core::{DomainError, MAX_FILES};
use anonbox_service::{IncomingFile, NewSubmission, SubmissionService, SubmitReceipt};
use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;

use crate::extractors::Client;
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Multipart field carrying the message text
const TEXT_FIELD: &str = "message";

/// Multipart field carrying each attachment
const FILE_FIELD: &str = "files";

/// Submission response envelope
#[derive(Debug, Serialize)]
pub struct SendBody {
    pub success: bool,
    pub message: String,
    pub data: SubmitReceipt,
}

/// Submit an anonymous message with optional attachments
///
/// POST /api/send (multipart/form-data)
pub async fn send_message(
    State(state): State<AppState>,
    Client(meta): Client,
    multipart: Multipart,
) -> ApiResult<Json<SendBody>> {
    let submission = read_submission(multipart).await?;

    let service = SubmissionService::new(state.service_context());
    let receipt = service.submit(submission, meta).await?;

    let message = if receipt.files_uploaded < receipt.files_total {
        format!(
            "Message sent, but only {} of {} files were uploaded",
            receipt.files_uploaded, receipt.files_total
        )
    } else {
        "Message sent successfully".to_string()
    };

    Ok(Json(SendBody {
        success: true,
        message,
        data: receipt,
    }))
}

/// Drain the multipart stream into a submission.
///
/// The file count is enforced before buffering each file so an
/// over-limit request never pulls more than `MAX_FILES` bodies into
/// memory. Unknown fields are ignored.
async fn read_submission(mut multipart: Multipart) -> ApiResult<NewSubmission> {
    let mut submission = NewSubmission::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))?
    {
        match field.name() {
            Some(TEXT_FIELD) => {
                submission.text = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(e.to_string()))?;
            }
            Some(FILE_FIELD) => {
                if submission.files.len() >= MAX_FILES {
                    return Err(ApiError::Domain(DomainError::TooManyFiles {
                        max: MAX_FILES,
                    }));
                }

                let original_name = field
                    .file_name()
                    .filter(|name| !name.is_empty())
                    .unwrap_or("file")
                    .to_string();
                let mime_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(e.to_string()))?;

                submission.files.push(IncomingFile {
                    original_name,
                    mime_type,
                    bytes: bytes.to_vec(),
                });
            }
            _ => {}
        }
    }

    Ok(submission)
}
