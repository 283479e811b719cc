//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::AccountId;

use crate::domain::entity::account::Account;
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// Administrator account repository trait
#[trait_variant::make(AccountRepository: Send)]
pub trait LocalAccountRepository {
    /// Insert a new account. A duplicate email is `AuthError::EmailTaken`.
    async fn create(&self, account: &Account) -> AuthResult<()>;

    async fn find_by_id(&self, account_id: &AccountId) -> AuthResult<Option<Account>>;

    /// Lookup by normalized email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Account>>;

    /// All accounts, oldest first
    async fn list(&self) -> AuthResult<Vec<Account>>;

    async fn update(&self, account: &Account) -> AuthResult<()>;

    /// Returns whether a row was removed
    async fn delete(&self, account_id: &AccountId) -> AuthResult<bool>;

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool>;
}
