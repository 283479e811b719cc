//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use kernel::id::AccountId;
use serde::{Deserialize, Serialize};

use crate::domain::entity::{account::Account, claims::SessionAccount};

// ============================================================================
// Login / Logout / Me
// ============================================================================

/// Login request
///
/// Fields are optional so that a missing one is reported as such rather
/// than as an unreadable body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub success: bool,
    pub account: SessionAccount,
}

#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

// ============================================================================
// Account Management
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct CreateAccountRequest {
    pub email: String,
    pub name: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAccountRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Account as listed in the back office. No password hash.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub id: AccountId,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Account> for AccountDto {
    fn from(account: &Account) -> Self {
        Self {
            id: account.account_id,
            email: account.email.as_str().to_string(),
            name: account.display_name.as_str().to_string(),
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AccountResponse {
    pub success: bool,
    pub account: AccountDto,
}

#[derive(Debug, Clone, Serialize)]
pub struct AccountListResponse {
    pub success: bool,
    pub accounts: Vec<AccountDto>,
}
