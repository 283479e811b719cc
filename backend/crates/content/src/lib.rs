//! Content Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Content entities, input drafts, repository traits
//! - `application/` - Use cases, upload storage, configuration
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, routers
//!
//! ## Features
//! - News with categories, events, gallery albums, alumni, site profile, slides
//! - Public read API; every write lives under the guarded `/api/admin` prefix
//! - File uploads kept on local disk and served under `/uploads/`
//!
//! ## Visibility
//! - Unpublished news never appears on the public API
//! - Only active slides are listed publicly

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::UploadConfig;
pub use domain::repository::ContentRepository;
pub use error::{ContentError, ContentResult};
pub use infra::postgres::PgContentRepository;
pub use presentation::router::{admin_router, admin_router_generic, public_router, public_router_generic};

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}

#[cfg(test)]
mod tests;
