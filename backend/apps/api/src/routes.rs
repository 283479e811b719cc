//! Route Composition
//!
//! Every router the binary serves, mounted under its prefix and wrapped in
//! the route guard.

use std::sync::Arc;

use auth::domain::repository::AccountRepository;
use auth::presentation::{accounts_router_generic, auth_router_generic};
use auth::{AuthConfig, with_route_guard};
use axum::Router;
use content::{ContentRepository, UploadConfig, admin_router_generic, public_router_generic};
use tower_http::services::ServeDir;

use crate::AppError;
use crate::pages;

pub fn app_router<A, C>(
    accounts: A,
    content: C,
    auth_config: Arc<AuthConfig>,
    uploads: Arc<UploadConfig>,
) -> Router
where
    A: AccountRepository + Clone + Send + Sync + 'static,
    C: ContentRepository,
{
    let routes = Router::new()
        .merge(pages::pages_router())
        .nest(
            "/api/auth",
            auth_router_generic(accounts.clone(), auth_config.clone()),
        )
        .nest(
            "/api/admin/accounts",
            accounts_router_generic(accounts, auth_config.clone()),
        )
        .nest(
            "/api/admin",
            admin_router_generic(content.clone(), uploads.clone()),
        )
        .nest("/api", public_router_generic(content, uploads.clone()))
        .nest_service("/uploads", ServeDir::new(&uploads.dir))
        .fallback(not_found);

    // The guard wraps the fallback too, so unknown admin paths redirect or 401
    with_route_guard(routes, auth_config)
}

async fn not_found() -> AppError {
    AppError::not_found("Resource not found")
}
