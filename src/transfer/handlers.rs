//! Transfer handler

use std::sync::Arc;

use axum::{Extension, Json, extract::State, http::StatusCode};

use super::models::TransferRequest;
use super::service::TransferService;
use crate::auth::Principal;
use crate::error::BankError;
use crate::gateway::state::AppState;

/// Move funds between two accounts
///
/// POST /transfer/
#[utoipa::path(
    post,
    path = "/transfer/",
    request_body = TransferRequest,
    responses(
        (status = 200, description = "Transfer applied"),
        (status = 400, description = "Invalid amount or insufficient funds"),
        (status = 404, description = "Account or user not found"),
        (status = 401, description = "Authentication failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Transfer"
)]
pub async fn transfer(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Json(req): Json<TransferRequest>,
) -> Result<StatusCode, BankError> {
    TransferService::execute(&state.db, principal.user_id, &req).await?;
    Ok(StatusCode::OK)
}
