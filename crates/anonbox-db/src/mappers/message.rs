//! Message model -> entity mapper

use anonbox_core::MessageRecord;

use crate::models::MessageModel;

impl From<MessageModel> for MessageRecord {
    fn from(model: MessageModel) -> Self {
        MessageRecord {
            id: model.id.to_string(),
            text: model.text,
            attachments: model.attachments.0,
            attachment_count: model.attachment_count.max(0) as u32,
            submitted_at: model.submitted_at,
            created_at: model.created_at,
            client_ip: model.client_ip,
            client_agent: model.client_agent,
            has_attachments: model.has_attachments,
        }
    }
}
