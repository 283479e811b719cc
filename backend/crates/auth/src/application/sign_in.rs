//! Sign In Use Case
//!
//! Checks an email and password against the account store and issues a
//! session token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::{IssuedToken, TokenService};
use crate::domain::entity::claims::SessionAccount;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{
    account_password::{AccountPassword, RawPassword},
    email::Email,
};
use crate::error::{AuthError, AuthResult};

pub struct SignInInput {
    pub email: String,
    pub password: String,
}

pub struct SignInOutput {
    pub token: IssuedToken,
    pub account: SessionAccount,
}

pub struct SignInUseCase<A>
where
    A: AccountRepository,
{
    account_repo: Arc<A>,
    config: Arc<AuthConfig>,
}

impl<A> SignInUseCase<A>
where
    A: AccountRepository,
{
    pub fn new(account_repo: Arc<A>, config: Arc<AuthConfig>) -> Self {
        Self {
            account_repo,
            config,
        }
    }

    /// Unknown email and wrong password both end in `InvalidCredentials`,
    /// after the same amount of Argon2 work.
    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        let password = RawPassword::unchecked(input.password);
        let pepper = self.config.pepper();

        let account = match Email::new(&input.email) {
            Ok(email) => self.account_repo.find_by_email(&email).await?,
            Err(_) => None,
        };

        let Some(account) = account else {
            AccountPassword::verify_dummy(&password, pepper);
            return Err(AuthError::InvalidCredentials);
        };

        if !account.verify_password(&password, pepper) {
            return Err(AuthError::InvalidCredentials);
        }

        let token = TokenService::new(self.config.clone()).issue(&account)?;

        tracing::info!(account_id = %account.account_id, "Account signed in");

        Ok(SignInOutput {
            token,
            account: account.session(),
        })
    }
}
