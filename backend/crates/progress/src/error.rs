//! Progress Error Types
//!
//! Progress-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Progress-specific result type alias
pub type ProgressResult<T> = Result<T, ProgressError>;

/// Progress-specific error variants
#[derive(Debug, Error)]
pub enum ProgressError {
    /// User does not exist
    #[error("User not found")]
    UserNotFound,

    /// Invalid completion input (score out of range, zero attempts, ...)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Module id not in the catalog
    #[error("Unknown module: {0}")]
    UnknownModule(String),

    /// Concurrent update lost the version race after all retries
    #[error("Progress was modified concurrently, please retry")]
    Conflict,

    /// Stored progress record could not be decoded
    #[error("Corrupt progress record: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ProgressError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProgressError::UserNotFound => StatusCode::NOT_FOUND,
            ProgressError::InvalidInput(_) | ProgressError::UnknownModule(_) => {
                StatusCode::BAD_REQUEST
            }
            ProgressError::Conflict => StatusCode::CONFLICT,
            ProgressError::Corrupt(_) | ProgressError::Database(_) | ProgressError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProgressError::UserNotFound => ErrorKind::NotFound,
            ProgressError::InvalidInput(_) | ProgressError::UnknownModule(_) => {
                ErrorKind::BadRequest
            }
            ProgressError::Conflict => ErrorKind::Conflict,
            ProgressError::Corrupt(_) | ProgressError::Database(_) | ProgressError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            ProgressError::Database(e) => {
                tracing::error!(error = %e, "Progress database error");
            }
            ProgressError::Corrupt(e) => {
                tracing::error!(error = %e, "Corrupt progress record");
            }
            ProgressError::Internal(msg) => {
                tracing::error!(message = %msg, "Progress internal error");
            }
            ProgressError::Conflict => {
                tracing::warn!("Progress update lost version race");
            }
            _ => {
                tracing::debug!(error = %self, "Progress error");
            }
        }
    }
}

impl IntoResponse for ProgressError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            ProgressError::UserNotFound.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ProgressError::InvalidInput("bad score".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ProgressError::UnknownModule("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ProgressError::Conflict.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            ProgressError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_kind_matches_status() {
        let errors = [
            ProgressError::UserNotFound,
            ProgressError::InvalidInput("x".into()),
            ProgressError::UnknownModule("x".into()),
            ProgressError::Conflict,
            ProgressError::Internal("x".into()),
        ];
        for e in errors {
            assert_eq!(e.kind().status_code(), e.status_code().as_u16());
        }
    }
}
