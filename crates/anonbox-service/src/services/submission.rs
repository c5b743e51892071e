//! Submission service - the accept/upload/persist pipeline
//!
//! Validation happens before any upload. Uploads run sequentially in
//! request order; a failed upload drops that file and the pipeline
//! continues, so one bad blob never loses the message. Persistence failure
//! is fatal.

use anonbox_core::{
    validate_file, validate_file_count, validate_text, wib_now, Attachment, NewMessage,
};
use tracing::{info, instrument, warn};

use crate::dto::{ClientMeta, NewSubmission, SubmitReceipt};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Service handling anonymous message submission
pub struct SubmissionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SubmissionService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Accept a submission: validate, upload attachments, persist.
    ///
    /// Returns the stored record's id plus upload accounting so the caller
    /// can surface partial attachment loss.
    #[instrument(skip(self, submission), fields(files = submission.files.len()))]
    pub async fn submit(
        &self,
        submission: NewSubmission,
        meta: ClientMeta,
    ) -> ServiceResult<SubmitReceipt> {
        let text = validate_text(&submission.text, submission.files.len())?.to_string();
        validate_file_count(submission.files.len())?;
        for file in &submission.files {
            validate_file(&file.mime_type, file.size_bytes())?;
        }

        let files_total = submission.files.len();
        let mut attachments = Vec::with_capacity(files_total);
        for file in &submission.files {
            match self
                .ctx
                .blob_store()
                .put(&file.bytes, &file.original_name, &file.mime_type)
                .await
            {
                Ok(url) => {
                    attachments.push(Attachment::new(
                        url,
                        file.original_name.clone(),
                        file.mime_type.clone(),
                        file.size_bytes(),
                    ));
                }
                Err(e) => {
                    warn!(
                        file = %file.original_name,
                        error = %e,
                        "attachment upload failed, continuing without it"
                    );
                }
            }
        }

        let message = NewMessage {
            text,
            attachments,
            submitted_at: wib_now(),
            client_ip: meta.ip,
            client_agent: meta.agent,
        };
        let files_uploaded = message.attachment_count();

        let record = self.ctx.message_store().add(&message).await?;
        info!(
            id = %record.id,
            files_uploaded,
            files_total,
            "message stored"
        );

        Ok(SubmitReceipt {
            id: record.id,
            files_uploaded,
            files_total,
        })
    }
}
