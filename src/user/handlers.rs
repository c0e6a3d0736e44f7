//! User administration handlers

use std::sync::Arc;

use axum::{Extension, Json, extract::State};

use super::models::{CreateUserRequest, UserProfile};
use super::service::UserService;
use crate::auth::Principal;
use crate::error::BankError;
use crate::gateway::state::AppState;

/// Create a new user (administrative only)
///
/// POST /user/
#[utoipa::path(
    post,
    path = "/user/",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "Created user with provisioned accounts", body = UserProfile),
        (status = 400, description = "Invalid input or username already exists"),
        (status = 403, description = "Caller is not an administrator"),
        (status = 401, description = "Authentication failed")
    ),
    security(("bearer_auth" = [])),
    tag = "User"
)]
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Json(req): Json<CreateUserRequest>,
) -> Result<Json<UserProfile>, BankError> {
    principal.require_admin()?;
    let profile = UserService::create(&state.db, &req, state.default_currency).await?;
    Ok(Json(profile))
}

/// List all users with nested accounts (administrative only)
///
/// GET /user/list
#[utoipa::path(
    get,
    path = "/user/list",
    responses(
        (status = 200, description = "Users ordered by id", body = [UserProfile]),
        (status = 403, description = "Caller is not an administrator"),
        (status = 401, description = "Authentication failed")
    ),
    security(("bearer_auth" = [])),
    tag = "User"
)]
pub async fn list_users(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
) -> Result<Json<Vec<UserProfile>>, BankError> {
    principal.require_admin()?;
    let profiles = UserService::list(&state.db).await?;
    Ok(Json(profiles))
}

/// Get the caller's own profile
///
/// GET /user/me
#[utoipa::path(
    get,
    path = "/user/me",
    responses(
        (status = 200, description = "Caller's profile with nested accounts", body = UserProfile),
        (status = 401, description = "Authentication failed")
    ),
    security(("bearer_auth" = [])),
    tag = "User"
)]
pub async fn me(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
) -> Result<Json<UserProfile>, BankError> {
    let profile = UserService::profile(&state.db, principal.user_id).await?;
    Ok(Json(profile))
}
