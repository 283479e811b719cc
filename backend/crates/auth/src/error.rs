//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Server-side details stay in the logs
const GENERIC_SERVER_ERROR: &str = "An unexpected error occurred";

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Login body without an email or password
    #[error("Email and password are required")]
    MissingFields,

    /// Request body could not be read or a field failed validation
    #[error("{0}")]
    Validation(String),

    /// Same message for an unknown email and a wrong password
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// No token, or a token that is tampered, expired or unreadable
    #[error("Authentication required")]
    SessionInvalid,

    #[error("Account not found")]
    AccountNotFound,

    #[error("An account with this email already exists")]
    EmailTaken,

    #[error("You cannot delete the account you are signed in with")]
    CannotDeleteSelf,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingFields | AuthError::Validation(_) | AuthError::CannotDeleteSelf => {
                StatusCode::BAD_REQUEST
            }
            AuthError::InvalidCredentials | AuthError::SessionInvalid => StatusCode::UNAUTHORIZED,
            AuthError::AccountNotFound => StatusCode::NOT_FOUND,
            AuthError::EmailTaken => StatusCode::CONFLICT,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingFields | AuthError::Validation(_) | AuthError::CannotDeleteSelf => {
                ErrorKind::BadRequest
            }
            AuthError::InvalidCredentials | AuthError::SessionInvalid => ErrorKind::Unauthorized,
            AuthError::AccountNotFound => ErrorKind::NotFound,
            AuthError::EmailTaken => ErrorKind::Conflict,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn to_app_error(&self) -> AppError {
        let message = match self.kind() {
            ErrorKind::InternalServerError => GENERIC_SERVER_ERROR.to_string(),
            _ => self.to_string(),
        };
        let error = AppError::new(self.kind(), message);
        match self {
            AuthError::InvalidCredentials => {
                error.with_action("Check your email and password and try again")
            }
            AuthError::SessionInvalid => error.with_action("Please sign in"),
            _ => error,
        }
    }

    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

/// Value-object failures carry user-facing messages; keep those.
impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::BadRequest | ErrorKind::UnprocessableEntity => {
                AuthError::Validation(err.message().to_string())
            }
            _ => AuthError::Internal(err.to_string()),
        }
    }
}
