//! Content Error Types
//!
//! Content-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Server-side details stay in the logs
const GENERIC_SERVER_ERROR: &str = "An unexpected error occurred";

/// Content-specific result type alias
pub type ContentResult<T> = Result<T, ContentError>;

#[derive(Debug, Error)]
pub enum ContentError {
    /// Input failed validation, or the request body was unreadable
    #[error("{0}")]
    Validation(String),

    /// `"{0} not found"`, e.g. `NotFound("Album")`
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    Conflict(String),

    #[error("File exceeds the {limit_mb} MB upload limit")]
    PayloadTooLarge { limit_mb: u64 },

    /// Reading or writing uploaded files
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ContentError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ContentError::Validation(_) => StatusCode::BAD_REQUEST,
            ContentError::NotFound(_) => StatusCode::NOT_FOUND,
            ContentError::Conflict(_) => StatusCode::CONFLICT,
            ContentError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ContentError::Storage(_) | ContentError::Database(_) | ContentError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ContentError::Validation(_) => ErrorKind::BadRequest,
            ContentError::NotFound(_) => ErrorKind::NotFound,
            ContentError::Conflict(_) => ErrorKind::Conflict,
            ContentError::PayloadTooLarge { .. } => ErrorKind::PayloadTooLarge,
            ContentError::Storage(_) | ContentError::Database(_) | ContentError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    pub fn to_app_error(&self) -> AppError {
        let message = match self.kind() {
            ErrorKind::InternalServerError => GENERIC_SERVER_ERROR.to_string(),
            _ => self.to_string(),
        };
        let error = AppError::new(self.kind(), message);
        match self {
            ContentError::PayloadTooLarge { .. } => {
                error.with_action("Compress the file or upload a smaller one")
            }
            _ => error,
        }
    }

    fn log(&self) {
        match self {
            ContentError::Database(e) => {
                tracing::error!(error = %e, "Content database error");
            }
            ContentError::Storage(e) => {
                tracing::error!(error = %e, "Upload storage error");
            }
            ContentError::Internal(msg) => {
                tracing::error!(message = %msg, "Content internal error");
            }
            ContentError::PayloadTooLarge { limit_mb } => {
                tracing::warn!(limit_mb, "Upload rejected: too large");
            }
            _ => {
                tracing::debug!(error = %self, "Content error");
            }
        }
    }
}

impl IntoResponse for ContentError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

/// Unique and foreign-key violations are the caller's fault
impl From<sqlx::Error> for ContentError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &err {
            if db.is_unique_violation() {
                return ContentError::Conflict("A record with this value already exists".into());
            }
            if db.is_foreign_key_violation() {
                return ContentError::Validation("Referenced record does not exist".into());
            }
        }
        ContentError::Database(err)
    }
}

impl From<AppError> for ContentError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::BadRequest | ErrorKind::UnprocessableEntity => {
                ContentError::Validation(err.message().to_string())
            }
            _ => ContentError::Internal(err.to_string()),
        }
    }
}
