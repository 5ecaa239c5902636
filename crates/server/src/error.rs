//! Unified error handling for route handlers.
//!
//! Provides a unified `AppError` type mapping the service's error taxonomy
//! onto HTTP responses. All fallible route handlers return
//! `Result<T, AppError>`. Note that a missing update/delete target is NOT
//! an error: those handlers answer 200 with a "No user found" body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::db::RepositoryError;

/// Application-level error type for the signup service.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required field is missing or malformed.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The email is already registered.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Login credentials matched no admin.
    #[error("Authentication failed")]
    Authentication,

    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log server errors with their original cause; the client only
        // sees a generic message.
        if matches!(self, Self::Database(_) | Self::Internal(_)) {
            tracing::error!(error = %self, "Request error");
        }

        let status = match &self {
            Self::Validation(_) | Self::Conflict(_) => StatusCode::BAD_REQUEST,
            Self::Authentication => StatusCode::UNAUTHORIZED,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = match self {
            Self::Validation(msg) | Self::Conflict(msg) => msg,
            Self::Authentication => "Invalid credentials".to_string(),
            Self::Database(_) | Self::Internal(_) => "Internal server error".to_string(),
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
