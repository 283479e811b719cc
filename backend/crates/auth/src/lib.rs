//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Accounts, token claims, repository traits
//! - `application/` - Use cases, token service, configuration
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, route guard
//!
//! ## Features
//! - Email + password login for back-office administrators
//! - Stateless sessions: an HS256 JWT in an HttpOnly `token` cookie
//! - One route guard for both the admin UI (redirect) and admin API (401)
//! - Administrator account management
//!
//! ## Security Model
//! - Passwords hashed with Argon2id
//! - Unknown email and wrong password are indistinguishable, in body and timing
//! - Tokens expire after a fixed lifetime; there is no refresh

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::token::TokenService;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAccountRepository;
pub use presentation::middleware::{CurrentAccount, RouteGuard, route_guard, with_route_guard};
pub use presentation::router::{accounts_router, auth_router};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}
