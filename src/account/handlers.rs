//! Account handlers (snapshot, deposit, withdraw)

use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, State},
};

use super::models::{AccountSnapshot, BalanceChangeRequest};
use super::repository::AccountRepository;
use super::service::BalanceService;
use crate::auth::Principal;
use crate::error::BankError;
use crate::gateway::state::AppState;

/// Get one of the caller's accounts
///
/// GET /account/{id}
#[utoipa::path(
    get,
    path = "/account/{id}",
    params(
        ("id" = i64, Path, description = "Account ID")
    ),
    responses(
        (status = 200, description = "Account snapshot", body = AccountSnapshot),
        (status = 404, description = "Account unknown or not owned by the caller"),
        (status = 401, description = "Authentication failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Account"
)]
pub async fn get_account(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Path(account_id): Path<i64>,
) -> Result<Json<AccountSnapshot>, BankError> {
    let account = AccountRepository::get_by_id(state.db.pool(), account_id)
        .await?
        .ok_or(BankError::NotFound)?;

    // Ownership mismatch is hidden behind NotFound.
    if account.user_id != principal.user_id {
        return Err(BankError::NotFound);
    }

    Ok(Json(AccountSnapshot::from(&account)))
}

/// Deposit into the caller's account
///
/// POST /account/deposit/{id}
#[utoipa::path(
    post,
    path = "/account/deposit/{id}",
    params(
        ("id" = i64, Path, description = "Account ID")
    ),
    request_body = BalanceChangeRequest,
    responses(
        (status = 200, description = "Updated account snapshot", body = AccountSnapshot),
        (status = 400, description = "Non-positive amount"),
        (status = 404, description = "Account unknown or not owned by the caller"),
        (status = 401, description = "Authentication failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Account"
)]
pub async fn deposit(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Path(account_id): Path<i64>,
    Json(req): Json<BalanceChangeRequest>,
) -> Result<Json<AccountSnapshot>, BankError> {
    let account = BalanceService::deposit(&state.db, principal.user_id, account_id, req.amount)
        .await?;
    Ok(Json(AccountSnapshot::from(&account)))
}

/// Withdraw from the caller's account
///
/// POST /account/withdraw/{id}
#[utoipa::path(
    post,
    path = "/account/withdraw/{id}",
    params(
        ("id" = i64, Path, description = "Account ID")
    ),
    request_body = BalanceChangeRequest,
    responses(
        (status = 200, description = "Updated account snapshot", body = AccountSnapshot),
        (status = 400, description = "Non-positive amount or insufficient funds"),
        (status = 404, description = "Account unknown or not owned by the caller"),
        (status = 401, description = "Authentication failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Account"
)]
pub async fn withdraw(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Path(account_id): Path<i64>,
    Json(req): Json<BalanceChangeRequest>,
) -> Result<Json<AccountSnapshot>, BankError> {
    let account = BalanceService::withdraw(&state.db, principal.user_id, account_id, req.amount)
        .await?;
    Ok(Json(AccountSnapshot::from(&account)))
}
