//! Admin service - listing, deletion, and aggregate statistics
//!
//! Category filtering happens after the ordered fetch, so the store only
//! needs a created_at index. Stats are a full scan; acceptable at this
//! deployment's scale.

use anonbox_core::{format_file_size, CategoryFilter, MediaCategory, MessageRecord};
use tracing::{info, instrument};

use crate::dto::{CategoryCounts, StatsResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Listing limit applied when the caller does not specify one
pub const DEFAULT_LIST_LIMIT: i64 = 100;

/// Upper bound on a caller-specified listing limit
pub const MAX_LIST_LIMIT: i64 = 500;

/// Service behind the authenticated admin endpoints
pub struct AdminService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AdminService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List messages newest first, optionally keeping only those with at
    /// least one attachment in the filtered category.
    ///
    /// `limit` is clamped to `1..=MAX_LIST_LIMIT`; `None` means
    /// `DEFAULT_LIST_LIMIT`. The filter applies after the limited fetch,
    /// so a filtered listing may return fewer than `limit` records.
    #[instrument(skip(self))]
    pub async fn list_messages(
        &self,
        filter: CategoryFilter,
        limit: Option<i64>,
    ) -> ServiceResult<Vec<MessageRecord>> {
        let limit = limit.unwrap_or(DEFAULT_LIST_LIMIT).clamp(1, MAX_LIST_LIMIT);
        let mut records = self.ctx.message_store().list_recent(limit).await?;
        if let CategoryFilter::Category(category) = filter {
            records.retain(|r| r.matches_category(category));
        }
        Ok(records)
    }

    /// Delete a message by id. Idempotent: deleting an unknown id succeeds.
    #[instrument(skip(self))]
    pub async fn delete_message(&self, id: &str) -> ServiceResult<()> {
        self.ctx.message_store().delete(id).await?;
        info!(id, "message deleted");
        Ok(())
    }

    /// Aggregate statistics over every stored message
    #[instrument(skip(self))]
    pub async fn stats(&self) -> ServiceResult<StatsResponse> {
        let records = self.ctx.message_store().fetch_all().await?;

        let total_messages = records.len();
        let messages_with_attachments = records.iter().filter(|r| r.has_attachments).count();

        let mut total_attachments = 0usize;
        let mut total_bytes = 0u64;
        let mut by_category = CategoryCounts::default();
        for attachment in records.iter().flat_map(|r| r.attachments.iter()) {
            total_attachments += 1;
            total_bytes += attachment.size_bytes;
            match attachment.category {
                MediaCategory::Image => by_category.image += 1,
                MediaCategory::Video => by_category.video += 1,
                MediaCategory::Other => by_category.other += 1,
            }
        }

        Ok(StatsResponse {
            total_messages,
            messages_with_attachments,
            messages_text_only: total_messages - messages_with_attachments,
            total_attachments,
            total_size: format_file_size(total_bytes),
            attachments_by_category: by_category,
        })
    }
}
