//! In-memory account store

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use kernel::id::AccountId;

use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Process-local account store for tests and local wiring
#[derive(Clone, Default)]
pub struct MemoryAccountRepository {
    accounts: Arc<Mutex<Vec<Account>>>,
}

impl MemoryAccountRepository {
    fn lock(&self) -> MutexGuard<'_, Vec<Account>> {
        self.accounts.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl AccountRepository for MemoryAccountRepository {
    async fn create(&self, account: &Account) -> AuthResult<()> {
        let mut accounts = self.lock();
        if accounts.iter().any(|a| a.email == account.email) {
            return Err(AuthError::EmailTaken);
        }
        accounts.push(account.clone());
        Ok(())
    }

    async fn find_by_id(&self, account_id: &AccountId) -> AuthResult<Option<Account>> {
        let accounts = self.lock();
        Ok(accounts.iter().find(|a| &a.account_id == account_id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Account>> {
        let accounts = self.lock();
        Ok(accounts.iter().find(|a| &a.email == email).cloned())
    }

    async fn list(&self) -> AuthResult<Vec<Account>> {
        Ok(self.lock().clone())
    }

    async fn update(&self, account: &Account) -> AuthResult<()> {
        let mut accounts = self.lock();
        let slot = accounts
            .iter_mut()
            .find(|a| a.account_id == account.account_id)
            .ok_or(AuthError::AccountNotFound)?;
        *slot = account.clone();
        Ok(())
    }

    async fn delete(&self, account_id: &AccountId) -> AuthResult<bool> {
        let mut accounts = self.lock();
        let before = accounts.len();
        accounts.retain(|a| &a.account_id != account_id);
        Ok(accounts.len() != before)
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        Ok(self.lock().iter().any(|a| &a.email == email))
    }
}
