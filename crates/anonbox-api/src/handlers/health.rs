//! Health check handler

use anonbox_core::{format_file_size, wib_now};
use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

/// Health check response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    /// Seconds since the server started
    pub uptime: u64,
    /// Resident set size, when the platform exposes it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<String>,
}

/// Liveness probe
///
/// GET /api/health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: wib_now(),
        uptime: state.uptime_secs(),
        memory: resident_set_size().map(format_file_size),
    })
}

/// Resident set size in bytes, read from procfs on Linux
fn resident_set_size() -> Option<u64> {
    let statm = std::fs::read_to_string("/proc/self/statm").ok()?;
    let resident_pages: u64 = statm.split_whitespace().nth(1)?.parse().ok()?;
    Some(resident_pages * 4096)
}
