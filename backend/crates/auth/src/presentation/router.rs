//! Auth Routers

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::AccountRepository;
use crate::infra::postgres::PgAccountRepository;
use crate::presentation::account_handlers;
use crate::presentation::handlers::{self, AuthAppState};

/// `/login`, `/logout`, `/me`, meant to be nested at `/api/auth`
pub fn auth_router(repo: PgAccountRepository, config: Arc<AuthConfig>) -> Router {
    auth_router_generic(repo, config)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, config: Arc<AuthConfig>) -> Router
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/login", post(handlers::login::<R>))
        .route("/logout", post(handlers::logout::<R>))
        .route("/me", get(handlers::me::<R>))
        .with_state(AuthAppState::new(repo, config))
}

/// Account management, meant to be nested at `/api/admin/accounts`
pub fn accounts_router(repo: PgAccountRepository, config: Arc<AuthConfig>) -> Router {
    accounts_router_generic(repo, config)
}

pub fn accounts_router_generic<R>(repo: R, config: Arc<AuthConfig>) -> Router
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/",
            get(account_handlers::list_accounts::<R>).post(account_handlers::create_account::<R>),
        )
        .route(
            "/{id}",
            get(account_handlers::get_account::<R>)
                .put(account_handlers::update_account::<R>)
                .delete(account_handlers::delete_account::<R>),
        )
        .with_state(AuthAppState::new(repo, config))
}
