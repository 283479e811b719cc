//! Account Management Handlers
//!
//! Mounted under `/api/admin/accounts`, behind the route guard.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use kernel::error::app_error::AppError;
use kernel::id::AccountId;

use crate::application::{CreateAccountInput, ManageAccountsUseCase, UpdateAccountInput};
use crate::domain::repository::AccountRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{
    AccountDto, AccountListResponse, AccountResponse, CreateAccountRequest, UpdateAccountRequest,
};
use crate::presentation::handlers::{AuthAppState, json_body};
use crate::presentation::middleware::CurrentAccount;

fn parse_account_id(raw: &str) -> AuthResult<AccountId> {
    raw.parse::<AccountId>()
        .map_err(|e| AppError::from(e).into())
}

fn use_case<R>(state: &AuthAppState<R>) -> ManageAccountsUseCase<R>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    ManageAccountsUseCase::new(state.repo.clone(), state.config.clone())
}

/// GET /api/admin/accounts
pub async fn list_accounts<R>(
    State(state): State<AuthAppState<R>>,
) -> AuthResult<Json<AccountListResponse>>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let accounts = use_case(&state).list().await?;

    Ok(Json(AccountListResponse {
        success: true,
        accounts: accounts.iter().map(AccountDto::from).collect(),
    }))
}

/// POST /api/admin/accounts
pub async fn create_account<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<CreateAccountRequest>, JsonRejection>,
) -> AuthResult<impl IntoResponse>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let req = json_body(payload)?;

    let account = use_case(&state)
        .create(CreateAccountInput {
            email: req.email,
            name: req.name,
            password: req.password,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AccountResponse {
            success: true,
            account: AccountDto::from(&account),
        }),
    ))
}

/// GET /api/admin/accounts/{id}
pub async fn get_account<R>(
    State(state): State<AuthAppState<R>>,
    Path(id): Path<String>,
) -> AuthResult<Json<AccountResponse>>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let account = use_case(&state).get(&parse_account_id(&id)?).await?;

    Ok(Json(AccountResponse {
        success: true,
        account: AccountDto::from(&account),
    }))
}

/// PUT /api/admin/accounts/{id}
pub async fn update_account<R>(
    State(state): State<AuthAppState<R>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateAccountRequest>, JsonRejection>,
) -> AuthResult<Json<AccountResponse>>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let account_id = parse_account_id(&id)?;
    let req = json_body(payload)?;

    let account = use_case(&state)
        .update(
            &account_id,
            UpdateAccountInput {
                name: req.name,
                password: req.password,
            },
        )
        .await?;

    Ok(Json(AccountResponse {
        success: true,
        account: AccountDto::from(&account),
    }))
}

/// DELETE /api/admin/accounts/{id}
pub async fn delete_account<R>(
    State(state): State<AuthAppState<R>>,
    current: CurrentAccount,
    Path(id): Path<String>,
) -> AuthResult<StatusCode>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let account_id = parse_account_id(&id)?;

    use_case(&state)
        .delete(&account_id, &current.account_id())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
