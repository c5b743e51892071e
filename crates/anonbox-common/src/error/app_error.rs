//! Application error types
//!
//! Unified error handling above the domain layer: admin auth, rate
//! limiting, configuration, and infrastructure failures.

use anonbox_core::DomainError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Admin authentication
    #[error("Unauthorized: wrong admin password")]
    Unauthorized,

    // Rate limiting
    #[error("Too many messages sent. Try again in 1 hour.")]
    RateLimited { retry_after_secs: u64 },

    // Server misconfiguration (missing secret/credentials)
    #[error("Server misconfigured: {0}")]
    Misconfigured(String),

    // Database errors
    #[error("Database error: {0}")]
    Database(String),

    // External service errors
    #[error("External service error: {0}")]
    ExternalService(String),

    // Internal errors
    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl AppError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Unauthorized => 401,
            Self::RateLimited { .. } => 429,
            Self::Misconfigured(_)
            | Self::Database(_)
            | Self::ExternalService(_)
            | Self::Internal(_) => 500,
            Self::Domain(e) => {
                if e.is_validation() {
                    400
                } else {
                    500
                }
            }
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::RateLimited { .. } => "RATE_LIMITED",
            Self::Misconfigured(_) => "SERVER_MISCONFIGURED",
            Self::Database(_) => "DATABASE_ERROR",
            Self::ExternalService(_) => "EXTERNAL_SERVICE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Domain(e) => e.code(),
        }
    }

    /// Check if this is a client error (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status_code())
    }

    /// Create a misconfiguration error
    #[must_use]
    pub fn misconfigured(msg: impl Into<String>) -> Self {
        Self::Misconfigured(msg.into())
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
