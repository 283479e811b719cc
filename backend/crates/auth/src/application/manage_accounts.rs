//! Manage Accounts Use Case
//!
//! Administrator CRUD over the account store, plus the startup seed.

use std::sync::Arc;

use kernel::id::AccountId;

use crate::application::config::AuthConfig;
use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{
    account_password::RawPassword, display_name::DisplayName, email::Email,
};
use crate::error::{AuthError, AuthResult};

pub struct CreateAccountInput {
    pub email: String,
    pub name: String,
    pub password: String,
}

#[derive(Default)]
pub struct UpdateAccountInput {
    pub name: Option<String>,
    pub password: Option<String>,
}

pub struct ManageAccountsUseCase<A>
where
    A: AccountRepository,
{
    account_repo: Arc<A>,
    config: Arc<AuthConfig>,
}

impl<A> ManageAccountsUseCase<A>
where
    A: AccountRepository,
{
    pub fn new(account_repo: Arc<A>, config: Arc<AuthConfig>) -> Self {
        Self {
            account_repo,
            config,
        }
    }

    pub async fn list(&self) -> AuthResult<Vec<Account>> {
        self.account_repo.list().await
    }

    pub async fn get(&self, account_id: &AccountId) -> AuthResult<Account> {
        self.account_repo
            .find_by_id(account_id)
            .await?
            .ok_or(AuthError::AccountNotFound)
    }

    pub async fn create(&self, input: CreateAccountInput) -> AuthResult<Account> {
        let email = Email::new(&input.email)?;
        let name = DisplayName::new(&input.name)?;
        let password = RawPassword::new(input.password)?;

        if self.account_repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailTaken);
        }

        let account = Account::new(email, name, &password, self.config.pepper())?;
        self.account_repo.create(&account).await?;

        tracing::info!(account_id = %account.account_id, "Account created");

        Ok(account)
    }

    pub async fn update(
        &self,
        account_id: &AccountId,
        input: UpdateAccountInput,
    ) -> AuthResult<Account> {
        let name = input.name.as_deref().map(DisplayName::new).transpose()?;
        let password = input.password.map(RawPassword::new).transpose()?;

        let mut account = self.get(account_id).await?;

        if let Some(name) = name {
            account.rename(name);
        }
        if let Some(password) = password {
            account.change_password(&password, self.config.pepper())?;
        }

        self.account_repo.update(&account).await?;

        tracing::info!(account_id = %account.account_id, "Account updated");

        Ok(account)
    }

    /// `acting` is the account making the request; it cannot remove itself
    pub async fn delete(&self, account_id: &AccountId, acting: &AccountId) -> AuthResult<()> {
        if account_id == acting {
            return Err(AuthError::CannotDeleteSelf);
        }

        if !self.account_repo.delete(account_id).await? {
            return Err(AuthError::AccountNotFound);
        }

        tracing::info!(account_id = %account_id, "Account deleted");

        Ok(())
    }

    /// Create the operator-configured account unless its email is taken.
    ///
    /// The password is trusted as given. Returns whether an account was made.
    pub async fn bootstrap(&self, email: &str, name: &str, password: String) -> AuthResult<bool> {
        let email = Email::new(email)?;
        if self.account_repo.exists_by_email(&email).await? {
            return Ok(false);
        }

        let name = DisplayName::new(name)?;
        let password = RawPassword::unchecked(password);
        let account = Account::new(email, name, &password, self.config.pepper())?;
        self.account_repo.create(&account).await?;

        tracing::info!(account_id = %account.account_id, email = %account.email, "Bootstrap account created");

        Ok(true)
    }
}
