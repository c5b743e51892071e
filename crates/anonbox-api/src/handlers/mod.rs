//! Request handlers

pub mod admin;
pub mod health;
pub mod submit;

use axum::Json;

use crate::response::ErrorBody;

/// Fallback for unknown routes
///
/// Any path outside the API surface gets the standard error envelope.
pub async fn not_found() -> (axum::http::StatusCode, Json<ErrorBody>) {
    (
        axum::http::StatusCode::NOT_FOUND,
        Json(ErrorBody::new("Endpoint not found")),
    )
}
