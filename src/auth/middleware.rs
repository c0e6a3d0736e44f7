//! JWT authentication middleware
//!
//! Extracts the bearer token, verifies it and injects a [`Principal`] into
//! request extensions for downstream handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};

use super::Principal;
use crate::error::{ErrorBody, error_codes};
use crate::gateway::state::AppState;
use crate::user::models::UserRole;

fn unauthorized(code: i32, msg: &str) -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorBody {
            code,
            msg: msg.to_string(),
        }),
    )
}

pub async fn jwt_auth_middleware(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, (StatusCode, Json<ErrorBody>)> {
    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| unauthorized(error_codes::MISSING_AUTH, "Missing authorization header"))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| unauthorized(error_codes::MISSING_AUTH, "Invalid authorization format"))?;

    let claims = state
        .auth
        .verify_token(token)
        .map_err(|_| unauthorized(error_codes::AUTH_FAILED, "Invalid or expired token"))?;

    let user_id: i64 = claims
        .sub
        .parse()
        .map_err(|_| unauthorized(error_codes::AUTH_FAILED, "Invalid token subject"))?;

    request.extensions_mut().insert(Principal {
        user_id,
        username: claims.name,
        is_admin: UserRole::from(claims.role).is_admin(),
    });

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use crate::user::models::UserRole;

    /// Claims carry the role as a raw i16; the principal's admin flag must
    /// round-trip through the same encoding the user store uses.
    #[test]
    fn test_claims_role_maps_to_admin_flag() {
        assert!(UserRole::from(UserRole::Admin as i16).is_admin());
        assert!(!UserRole::from(UserRole::User as i16).is_admin());
    }
}
