//! Content Routers
//!
//! `public_router` is nested at `/api` and only reads. `admin_router` is
//! nested at `/api/admin`, behind the route guard.

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, post, put};
use std::sync::Arc;

use crate::application::config::UploadConfig;
use crate::domain::repository::ContentRepository;
use crate::infra::postgres::PgContentRepository;
use crate::presentation::handlers::{
    ContentAppState, alumni, events, gallery, news, site, uploads,
};

/// Create the public content router with PostgreSQL repository
pub fn public_router(repo: PgContentRepository, config: Arc<UploadConfig>) -> Router {
    public_router_generic(repo, config)
}

/// Create a generic public content router for any repository implementation
pub fn public_router_generic<R: ContentRepository>(repo: R, config: Arc<UploadConfig>) -> Router {
    let state = ContentAppState::new(repo, config);

    Router::new()
        .route("/categories", get(news::list_categories::<R>))
        .route("/news", get(news::list_published::<R>))
        .route("/news/{id}", get(news::get_published::<R>))
        .route("/events", get(events::list::<R>))
        .route("/events/{id}", get(events::get::<R>))
        .route("/gallery", get(gallery::list_albums::<R>))
        .route("/gallery/{id}", get(gallery::get_album::<R>))
        .route("/alumni", get(alumni::list::<R>))
        .route("/alumni/{id}", get(alumni::get::<R>))
        .route("/profile", get(site::get_profile::<R>))
        .route("/slides", get(site::list_active_slides::<R>))
        .with_state(state)
}

/// Create the back-office content router with PostgreSQL repository
pub fn admin_router(repo: PgContentRepository, config: Arc<UploadConfig>) -> Router {
    admin_router_generic(repo, config)
}

/// Create a generic back-office content router for any repository implementation
pub fn admin_router_generic<R: ContentRepository>(repo: R, config: Arc<UploadConfig>) -> Router {
    let body_limit = config.max_request_bytes();
    let state = ContentAppState::new(repo, config);

    Router::new()
        // Categories
        .route("/categories", post(news::create_category::<R>))
        .route("/categories/{id}", delete(news::delete_category::<R>))
        // News
        .route("/news", get(news::list_all::<R>).post(news::create::<R>))
        .route(
            "/news/{id}",
            get(news::get::<R>)
                .put(news::update::<R>)
                .delete(news::delete::<R>),
        )
        // Events
        .route("/events", post(events::create::<R>))
        .route(
            "/events/{id}",
            put(events::update::<R>).delete(events::delete::<R>),
        )
        // Gallery
        .route("/gallery", post(gallery::create_album::<R>))
        .route(
            "/gallery/{id}",
            put(gallery::update_album::<R>).delete(gallery::delete_album::<R>),
        )
        .route("/gallery/{id}/media", post(gallery::add_media::<R>))
        .route(
            "/gallery/media/{media_id}",
            delete(gallery::delete_media::<R>),
        )
        // Alumni
        .route("/alumni", post(alumni::create::<R>))
        .route(
            "/alumni/{id}",
            put(alumni::update::<R>).delete(alumni::delete::<R>),
        )
        // Site
        .route("/profile", put(site::save_profile::<R>))
        .route(
            "/slides",
            get(site::list_all_slides::<R>).post(site::create_slide::<R>),
        )
        .route(
            "/slides/{id}",
            get(site::get_slide::<R>)
                .put(site::update_slide::<R>)
                .delete(site::delete_slide::<R>),
        )
        // Uploads
        .route(
            "/uploads",
            get(uploads::list::<R>)
                .post(uploads::upload::<R>)
                .layer(DefaultBodyLimit::max(body_limit)),
        )
        .route("/uploads/{id}", delete(uploads::delete::<R>))
        .with_state(state)
}
