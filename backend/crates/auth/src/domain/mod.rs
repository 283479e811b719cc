//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{account::Account, claims::AccountClaims, claims::SessionAccount};
pub use repository::AccountRepository;
