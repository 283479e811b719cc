//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

mod config;
mod pages;
mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use auth::PgAccountRepository;
use auth::application::ManageAccountsUseCase;
use axum::{
    Router, http,
    http::{Method, header},
};
use content::{PgContentRepository, UploadConfig};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{AdminSeed, AppConfig};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,content=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;

    // Database connection
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    let auth_config = Arc::new(config.auth.clone());
    let accounts = PgAccountRepository::new(pool.clone());

    // Startup seed: failures are logged, not fatal
    if let Some(seed) = &config.admin_seed {
        seed_admin(&accounts, auth_config.clone(), seed).await;
    }

    let uploads = Arc::new(UploadConfig::with_dir(&config.upload_dir));
    tokio::fs::create_dir_all(&uploads.dir).await?;

    // CORS configuration
    let allowed_origins: Vec<http::HeaderValue> = config
        .frontend_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    let app = routes::app_router(
        accounts,
        PgContentRepository::new(pool),
        auth_config,
        uploads,
    )
    .layer(TraceLayer::new_for_http())
    .layer(cors);

    // Start server
    tracing::info!("Listening on {}", config.bind_addr);

    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

async fn seed_admin(
    accounts: &PgAccountRepository,
    config: Arc<auth::AuthConfig>,
    seed: &AdminSeed,
) {
    let use_case = ManageAccountsUseCase::new(Arc::new(accounts.clone()), config);
    match use_case
        .bootstrap(&seed.email, &seed.name, seed.password.clone())
        .await
    {
        Ok(true) => {}
        Ok(false) => tracing::info!(email = %seed.email, "Administrator account already exists"),
        Err(e) => tracing::warn!(error = %e, "Administrator seed failed, continuing anyway"),
    }
}

#[cfg(test)]
mod tests;
