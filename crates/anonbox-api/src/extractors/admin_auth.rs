//! Admin authentication extractor
//!
//! Admin endpoints share one secret, supplied either as the
//! `x-admin-password` header or the `password` query parameter. When no
//! secret is configured the endpoints are unusable and report a server
//! misconfiguration rather than letting anyone in.

use std::collections::HashMap;

use anonbox_common::AppError;
use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts, Query},
    http::request::Parts,
};

use crate::response::ApiError;
use crate::state::AppState;

/// Header carrying the admin secret
pub const ADMIN_PASSWORD_HEADER: &str = "x-admin-password";

/// Proof that the request carried the correct admin secret
#[derive(Debug, Clone, Copy)]
pub struct AdminAuth;

#[async_trait]
impl<S> FromRequestParts<S> for AdminAuth
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        let Some(expected) = app_state.config().admin.password.clone() else {
            return Err(ApiError::App(AppError::misconfigured(
                "admin password is not configured",
            )));
        };

        let from_header = parts
            .headers
            .get(ADMIN_PASSWORD_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        let supplied = match from_header {
            Some(value) => Some(value),
            None => {
                let Query(params) = Query::<HashMap<String, String>>::from_request_parts(parts, state)
                    .await
                    .map_err(|_| ApiError::invalid_query("malformed query string"))?;
                params.get("password").cloned()
            }
        };

        match supplied {
            Some(password) if password == expected => Ok(AdminAuth),
            _ => {
                tracing::warn!(path = %parts.uri.path(), "Admin authentication failed");
                Err(ApiError::App(AppError::Unauthorized))
            }
        }
    }
}
