//! Route Guard
//!
//! One middleware in front of the whole application. Requests under a
//! protected prefix need a valid `token` cookie; page requests without one
//! are redirected to the login page, API requests get a 401 JSON error.
//! The verified claims ride along in the request extensions and are read
//! back by [`CurrentAccount`].

use axum::Router;
use axum::body::Body;
use axum::extract::{FromRequestParts, Request, State};
use axum::http::HeaderMap;
use axum::http::request::Parts;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Redirect, Response};
use kernel::id::AccountId;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::entity::claims::{AccountClaims, SessionAccount};
use crate::error::{AuthError, AuthResult};

/// How the guard treats a request path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    /// Protected HTML page; failures redirect
    Page,
    /// Protected JSON endpoint; failures are 401
    Api,
}

/// Path classification for the guard
#[derive(Debug, Clone)]
pub struct RouteGuard {
    protected_prefixes: Vec<String>,
    public_paths: Vec<String>,
    login_page: String,
}

impl RouteGuard {
    pub fn from_config(config: &AuthConfig) -> Self {
        Self {
            protected_prefixes: config.protected_prefixes.clone(),
            public_paths: config.public_paths.clone(),
            login_page: config.login_page.clone(),
        }
    }

    /// `/admin` covers `/admin` and `/admin/...`, not `/administrator`
    pub fn classify(&self, path: &str) -> Access {
        let path = normalize(path);

        if self.public_paths.iter().any(|p| normalize(p) == path) {
            return Access::Public;
        }

        let protected = self
            .protected_prefixes
            .iter()
            .any(|prefix| is_under(path, normalize(prefix)));

        match protected {
            false => Access::Public,
            true if is_under(path, "/api") => Access::Api,
            true => Access::Page,
        }
    }

    pub fn login_page(&self) -> &str {
        &self.login_page
    }
}

fn normalize(path: &str) -> &str {
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

fn is_under(path: &str, prefix: &str) -> bool {
    path == prefix
        || path
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Read and verify the session cookie
pub fn authenticate(headers: &HeaderMap, tokens: &TokenService) -> AuthResult<AccountClaims> {
    let token = platform::cookie::extract_cookie(headers, &tokens.config().cookie_name)
        .ok_or(AuthError::SessionInvalid)?;

    tokens.verify(&token)
}

// ============================================================================
// Middleware
// ============================================================================

#[derive(Clone)]
pub struct GuardState {
    pub guard: Arc<RouteGuard>,
    pub tokens: TokenService,
}

impl GuardState {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self {
            guard: Arc::new(RouteGuard::from_config(&config)),
            tokens: TokenService::new(config),
        }
    }
}

pub async fn route_guard(
    State(state): State<GuardState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let access = state.guard.classify(req.uri().path());
    if access == Access::Public {
        return next.run(req).await;
    }

    match authenticate(req.headers(), &state.tokens) {
        Ok(claims) => {
            req.extensions_mut().insert(claims);
            next.run(req).await
        }
        Err(err) => {
            tracing::debug!(path = %req.uri().path(), "Unauthenticated request to protected path");
            match access {
                Access::Page => Redirect::temporary(state.guard.login_page()).into_response(),
                _ => err.into_response(),
            }
        }
    }
}

/// Put the route guard in front of every route already on `router`
pub fn with_route_guard(router: Router, config: Arc<AuthConfig>) -> Router {
    router.layer(middleware::from_fn_with_state(
        GuardState::new(config),
        route_guard,
    ))
}

// ============================================================================
// Extractor
// ============================================================================

/// The signed-in account, as verified by the route guard
#[derive(Debug, Clone)]
pub struct CurrentAccount(pub AccountClaims);

impl CurrentAccount {
    pub fn account_id(&self) -> AccountId {
        self.0.sub
    }

    pub fn session(&self) -> SessionAccount {
        self.0.session()
    }
}

impl<S> FromRequestParts<S> for CurrentAccount
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AccountClaims>()
            .cloned()
            .map(CurrentAccount)
            .ok_or(AuthError::SessionInvalid)
    }
}
