//! Token Service
//!
//! Issues and verifies the signed session token. The route guard, the
//! `/api/auth/me` endpoint and the login endpoint all go through this one
//! type, with the one secret in [`AuthConfig`].

use std::sync::Arc;

use chrono::Utc;
use platform::jwt::{self, JwtError};

use crate::application::config::AuthConfig;
use crate::domain::entity::{account::Account, claims::AccountClaims};
use crate::error::{AuthError, AuthResult};

/// A freshly signed token and what it says
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub claims: AccountClaims,
    pub max_age_secs: u64,
}

#[derive(Debug, Clone)]
pub struct TokenService {
    config: Arc<AuthConfig>,
}

impl TokenService {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    pub fn issue(&self, account: &Account) -> AuthResult<IssuedToken> {
        self.issue_at(account, Utc::now().timestamp())
    }

    /// Sign claims for `account` as of `now` (Unix seconds)
    pub fn issue_at(&self, account: &Account, now: i64) -> AuthResult<IssuedToken> {
        let ttl = self.config.token_ttl_secs();
        let claims = AccountClaims {
            sub: account.account_id,
            email: account.email.as_str().to_string(),
            name: account.display_name.as_str().to_string(),
            iat: now,
            exp: now + ttl as i64,
        };

        let token = jwt::encode_hs256(&claims, &self.config.token_secret)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        Ok(IssuedToken {
            token,
            claims,
            max_age_secs: ttl,
        })
    }

    pub fn verify(&self, token: &str) -> AuthResult<AccountClaims> {
        self.verify_at(token, Utc::now().timestamp())
    }

    /// Every failure, whatever the cause, is `SessionInvalid`
    pub fn verify_at(&self, token: &str, now: i64) -> AuthResult<AccountClaims> {
        let claims: AccountClaims =
            jwt::decode_hs256(token, &self.config.token_secret).map_err(|e| {
                match &e {
                    JwtError::InvalidSignature | JwtError::UnsupportedAlgorithm(_) => {
                        tracing::warn!(error = %e, "Rejected session token");
                    }
                    _ => tracing::debug!(error = %e, "Unreadable session token"),
                }
                AuthError::SessionInvalid
            })?;

        if claims.is_expired_at(now) {
            tracing::debug!(sub = %claims.sub, exp = claims.exp, "Session token expired");
            return Err(AuthError::SessionInvalid);
        }

        Ok(claims)
    }
}
