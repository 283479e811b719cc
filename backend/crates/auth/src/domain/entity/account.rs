//! Account Entity
//!
//! An administrator allowed into the back office.

use chrono::{DateTime, Utc};
use kernel::error::app_error::AppResult;
use kernel::id::AccountId;

use crate::domain::entity::claims::SessionAccount;
use crate::domain::value_object::{
    account_password::{AccountPassword, RawPassword},
    display_name::DisplayName,
    email::Email,
};

#[derive(Debug, Clone)]
pub struct Account {
    pub account_id: AccountId,
    pub email: Email,
    pub display_name: DisplayName,
    pub password_hash: AccountPassword,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account, hashing `password` with the configured pepper
    pub fn new(
        email: Email,
        display_name: DisplayName,
        password: &RawPassword,
        pepper: Option<&[u8]>,
    ) -> AppResult<Self> {
        let now = Utc::now();
        Ok(Self {
            account_id: AccountId::new(),
            email,
            display_name,
            password_hash: AccountPassword::from_raw(password, pepper)?,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn rename(&mut self, display_name: DisplayName) {
        self.display_name = display_name;
        self.updated_at = Utc::now();
    }

    pub fn change_password(&mut self, password: &RawPassword, pepper: Option<&[u8]>) -> AppResult<()> {
        self.password_hash = AccountPassword::from_raw(password, pepper)?;
        self.updated_at = Utc::now();
        Ok(())
    }

    pub fn verify_password(&self, password: &RawPassword, pepper: Option<&[u8]>) -> bool {
        self.password_hash.verify(password, pepper)
    }

    /// Identity as exposed to the client
    pub fn session(&self) -> SessionAccount {
        SessionAccount {
            id: self.account_id,
            email: self.email.as_str().to_string(),
            name: self.display_name.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Account {
        Account::new(
            Email::new("admin@school.org").unwrap(),
            DisplayName::new("Admin").unwrap(),
            &RawPassword::unchecked("admin123".to_string()),
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_new_account() {
        let account = sample();
        assert_eq!(account.created_at, account.updated_at);
        assert!(account.verify_password(&RawPassword::unchecked("admin123".to_string()), None));
    }

    #[test]
    fn test_change_password() {
        let mut account = sample();
        let new_password = RawPassword::new("Another-Secret-7".to_string()).unwrap();
        account.change_password(&new_password, None).unwrap();

        assert!(account.verify_password(&new_password, None));
        assert!(!account.verify_password(&RawPassword::unchecked("admin123".to_string()), None));
        assert!(account.updated_at >= account.created_at);
    }

    #[test]
    fn test_session_projection() {
        let account = sample();
        let session = account.session();
        assert_eq!(session.id, account.account_id);
        assert_eq!(session.email, "admin@school.org");
        assert_eq!(session.name, "Admin");
    }
}
