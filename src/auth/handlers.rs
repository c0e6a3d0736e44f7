//! Login handler

use std::sync::Arc;

use axum::{Json, extract::State};

use super::service::{AuthResponse, LoginRequest};
use crate::error::BankError;
use crate::gateway::state::AppState;

/// Authenticate and obtain a JWT
///
/// POST /auth/login
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Token issued", body = AuthResponse),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, BankError> {
    let response = state.auth.login(&req).await?;
    Ok(Json(response))
}
