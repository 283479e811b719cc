//! HTTP Handlers
//!
//! `POST /api/auth/login`, `POST /api/auth/logout`, `GET /api/auth/me`.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{SignInInput, SignInUseCase, TokenService};
use crate::domain::repository::AccountRepository;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{LoginRequest, SessionResponse, SuccessResponse};
use crate::presentation::middleware::authenticate;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
    pub tokens: TokenService,
}

impl<R> AuthAppState<R>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    pub fn new(repo: R, config: Arc<AuthConfig>) -> Self {
        Self {
            repo: Arc::new(repo),
            tokens: TokenService::new(config.clone()),
            config,
        }
    }
}

/// Unwrap a JSON body, reporting any rejection as a 400
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> AuthResult<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AuthError::Validation(rejection.body_text()))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AuthResult<impl IntoResponse>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let req = json_body(payload)?;

    let (Some(email), Some(password)) = (non_blank(req.email), non_blank(req.password)) else {
        return Err(AuthError::MissingFields);
    };

    let use_case = SignInUseCase::new(state.repo.clone(), state.config.clone());
    let output = use_case.execute(SignInInput { email, password }).await?;

    let cookie = state
        .config
        .cookie()
        .set_cookie_header(&output.token.token)
        .map_err(|e| AuthError::Internal(e.to_string()))?;

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(SessionResponse {
            success: true,
            account: output.account,
        }),
    ))
}

// ============================================================================
// Logout
// ============================================================================

/// POST /api/auth/logout
///
/// Tokens are not tracked server-side; clearing the cookie is the whole job.
pub async fn logout<R>(State(state): State<AuthAppState<R>>) -> AuthResult<impl IntoResponse>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let cookie = state
        .config
        .cookie()
        .delete_cookie_header()
        .map_err(|e| AuthError::Internal(e.to_string()))?;

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(SuccessResponse::ok()),
    ))
}

// ============================================================================
// Me
// ============================================================================

/// GET /api/auth/me
pub async fn me<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<Json<SessionResponse>>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let claims = authenticate(&headers, &state.tokens)?;

    Ok(Json(SessionResponse {
        success: true,
        account: claims.session(),
    }))
}
