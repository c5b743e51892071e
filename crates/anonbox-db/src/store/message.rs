//! PostgreSQL implementation of MessageStore

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use anonbox_core::{MessageRecord, MessageStore, NewMessage, StoreResult};

use crate::models::{InsertedRow, MessageModel};

use super::error::map_db_error;

const SELECT_COLUMNS: &str = "id, text, attachments, attachment_count, submitted_at, \
     created_at, client_ip, client_agent, has_attachments";

/// PostgreSQL implementation of MessageStore
#[derive(Clone)]
pub struct PgMessageStore {
    pool: PgPool,
}

impl PgMessageStore {
    /// Create a new PgMessageStore
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageStore for PgMessageStore {
    #[instrument(skip(self, message))]
    async fn add(&self, message: &NewMessage) -> StoreResult<MessageRecord> {
        let inserted = sqlx::query_as::<_, InsertedRow>(
            r#"
            INSERT INTO messages
                (text, attachments, attachment_count, submitted_at,
                 client_ip, client_agent, has_attachments)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, created_at
            "#,
        )
        .bind(&message.text)
        .bind(Json(&message.attachments))
        .bind(message.attachment_count() as i32)
        .bind(&message.submitted_at)
        .bind(&message.client_ip)
        .bind(&message.client_agent)
        .bind(message.has_attachments())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(MessageRecord {
            id: inserted.id.to_string(),
            text: message.text.clone(),
            attachments: message.attachments.clone(),
            attachment_count: message.attachment_count() as u32,
            submitted_at: message.submitted_at.clone(),
            created_at: inserted.created_at,
            client_ip: message.client_ip.clone(),
            client_agent: message.client_agent.clone(),
            has_attachments: message.has_attachments(),
        })
    }

    #[instrument(skip(self))]
    async fn list_recent(&self, limit: i64) -> StoreResult<Vec<MessageRecord>> {
        let rows = sqlx::query_as::<_, MessageModel>(&format!(
            "SELECT {SELECT_COLUMNS} FROM messages ORDER BY created_at DESC LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(MessageRecord::from).collect())
    }

    #[instrument(skip(self))]
    async fn fetch_all(&self) -> StoreResult<Vec<MessageRecord>> {
        let rows = sqlx::query_as::<_, MessageModel>(&format!(
            "SELECT {SELECT_COLUMNS} FROM messages ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(MessageRecord::from).collect())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> StoreResult<()> {
        // An id that is not a valid uuid matches no document; the delete is
        // idempotent so that is still a success.
        let Ok(uuid) = id.parse::<Uuid>() else {
            return Ok(());
        };

        sqlx::query("DELETE FROM messages WHERE id = $1")
            .bind(uuid)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}
