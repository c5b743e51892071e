//! Admin handlers: listing, deletion, and statistics
//!
//! All three require the shared admin secret via the AdminAuth extractor.

use anonbox_core::{CategoryFilter, MessageRecord};
use anonbox_service::{AdminService, StatsResponse};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::extractors::AdminAuth;
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Query parameters for message listing
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
    pub limit: Option<i64>,
}

/// Listing response envelope
#[derive(Debug, Serialize)]
pub struct ListBody {
    pub success: bool,
    pub count: usize,
    pub filter: String,
    pub data: Vec<MessageRecord>,
}

/// Deletion response envelope
#[derive(Debug, Serialize)]
pub struct DeleteBody {
    pub success: bool,
    pub message: String,
}

/// Statistics response envelope
#[derive(Debug, Serialize)]
pub struct StatsBody {
    pub success: bool,
    pub data: StatsResponse,
}

/// List messages, newest first, optionally filtered by category
///
/// GET /api/messages?category=image&limit=50
pub async fn list_messages(
    State(state): State<AppState>,
    _auth: AdminAuth,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<ListBody>> {
    let filter: CategoryFilter = query
        .category
        .as_deref()
        .unwrap_or("all")
        .parse()
        .map_err(|e: anonbox_core::ParseCategoryFilterError| ApiError::invalid_query(e.to_string()))?;

    let service = AdminService::new(state.service_context());
    let records = service.list_messages(filter, query.limit).await?;

    Ok(Json(ListBody {
        success: true,
        count: records.len(),
        filter: filter.to_string(),
        data: records,
    }))
}

/// Delete one message by id
///
/// DELETE /api/messages/{id}
pub async fn delete_message(
    State(state): State<AppState>,
    _auth: AdminAuth,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteBody>> {
    let service = AdminService::new(state.service_context());
    service.delete_message(&id).await?;

    Ok(Json(DeleteBody {
        success: true,
        message: "Message deleted".to_string(),
    }))
}

/// Aggregate statistics over all messages
///
/// GET /api/stats
pub async fn stats(
    State(state): State<AppState>,
    _auth: AdminAuth,
) -> ApiResult<Json<StatsBody>> {
    let service = AdminService::new(state.service_context());
    let data = service.stats().await?;

    Ok(Json(StatsBody {
        success: true,
        data,
    }))
}
