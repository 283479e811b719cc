//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod manage_accounts;
pub mod sign_in;
pub mod token;

// Re-exports
pub use config::AuthConfig;
pub use manage_accounts::{CreateAccountInput, ManageAccountsUseCase, UpdateAccountInput};
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use token::{IssuedToken, TokenService};
