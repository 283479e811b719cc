//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::AccountId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{
    account_password::AccountPassword, display_name::DisplayName, email::Email,
};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed account repository
#[derive(Clone)]
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// A unique violation on `accounts.email` becomes `EmailTaken`
fn map_write_error(err: sqlx::Error) -> AuthError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => AuthError::EmailTaken,
        _ => AuthError::Database(err),
    }
}

// ============================================================================
// Account Repository Implementation
// ============================================================================

impl AccountRepository for PgAccountRepository {
    async fn create(&self, account: &Account) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO accounts (
                account_id,
                email,
                display_name,
                password_hash,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(account.account_id.as_uuid())
        .bind(account.email.as_str())
        .bind(account.display_name.as_str())
        .bind(account.password_hash.as_phc_string())
        .bind(account.created_at)
        .bind(account.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(())
    }

    async fn find_by_id(&self, account_id: &AccountId) -> AuthResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT
                account_id,
                email,
                display_name,
                password_hash,
                created_at,
                updated_at
            FROM accounts
            WHERE account_id = $1
            "#,
        )
        .bind(account_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(AccountRow::into_account).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT
                account_id,
                email,
                display_name,
                password_hash,
                created_at,
                updated_at
            FROM accounts
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(AccountRow::into_account).transpose()
    }

    async fn list(&self) -> AuthResult<Vec<Account>> {
        let rows = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT
                account_id,
                email,
                display_name,
                password_hash,
                created_at,
                updated_at
            FROM accounts
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(AccountRow::into_account).collect()
    }

    async fn update(&self, account: &Account) -> AuthResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE accounts SET
                email = $2,
                display_name = $3,
                password_hash = $4,
                updated_at = $5
            WHERE account_id = $1
            "#,
        )
        .bind(account.account_id.as_uuid())
        .bind(account.email.as_str())
        .bind(account.display_name.as_str())
        .bind(account.password_hash.as_phc_string())
        .bind(account.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        if result.rows_affected() == 0 {
            return Err(AuthError::AccountNotFound);
        }

        Ok(())
    }

    async fn delete(&self, account_id: &AccountId) -> AuthResult<bool> {
        let deleted = sqlx::query("DELETE FROM accounts WHERE account_id = $1")
            .bind(account_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM accounts WHERE email = $1)")
                .bind(email.as_str())
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct AccountRow {
    account_id: Uuid,
    email: String,
    display_name: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AccountRow {
    fn into_account(self) -> AuthResult<Account> {
        let password_hash = AccountPassword::from_phc_string(self.password_hash)
            .map_err(|e| AuthError::Internal(format!("Invalid password hash: {}", e)))?;

        Ok(Account {
            account_id: AccountId::from_uuid(self.account_id),
            email: Email::from_db(self.email),
            display_name: DisplayName::from_db(self.display_name),
            password_hash,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
