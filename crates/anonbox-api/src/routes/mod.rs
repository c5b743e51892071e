//! Route definitions
//!
//! All endpoints mount under /api. The rate limiter wraps only the
//! submission route; admin and health traffic is never counted against a
//! client's window. The body limit leaves room for a full set of
//! attachments plus multipart framing.

use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn_with_state,
    routing::{delete, get, post},
    Router,
};

use crate::handlers::{admin, health, not_found, submit};
use crate::middleware::enforce_rate_limit;
use crate::state::AppState;

/// Upper bound on a multipart request body
const MAX_BODY_BYTES: usize = 85 * 1024 * 1024;

/// Create the main API router with all routes
pub fn create_router(state: AppState) -> Router<AppState> {
    Router::new()
        .nest("/api", api_routes(state))
        .fallback(not_found)
}

/// API routes
fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(submission_routes(state))
        .merge(admin_routes())
        .merge(health_routes())
}

/// Submission route, rate limited per client
fn submission_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/send", post(submit::send_message))
        .layer(from_fn_with_state(state, enforce_rate_limit))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
}

/// Admin routes (secret enforced by the AdminAuth extractor)
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/messages", get(admin::list_messages))
        .route("/messages/:id", delete(admin::delete_message))
        .route("/stats", get(admin::stats))
}

/// Health check route
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health::health_check))
}
