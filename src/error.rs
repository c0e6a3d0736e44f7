//! Error taxonomy for the money-movement core and its HTTP mapping.
//!
//! Every mutating operation is all-or-nothing: these errors are synchronous,
//! local rejections surfaced to the HTTP boundary as the corresponding status
//! code. Nothing is retried, nothing is swallowed.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Standard API error codes
pub mod error_codes {
    // Client errors (1xxx)
    pub const INVALID_PARAMETER: i32 = 1001;
    pub const INSUFFICIENT_FUNDS: i32 = 1002;

    // Auth errors (2xxx)
    pub const MISSING_AUTH: i32 = 2001;
    pub const AUTH_FAILED: i32 = 2002;
    pub const FORBIDDEN: i32 = 2003;

    // Resource errors (4xxx)
    pub const NOT_FOUND: i32 = 4004;

    // Server errors (5xxx)
    pub const INTERNAL_ERROR: i32 = 5000;
}

/// Error response body
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    /// Machine-readable error code, see [`error_codes`]
    #[schema(example = 1001)]
    pub code: i32,
    /// Short message description
    #[schema(example = "amount must be positive")]
    pub msg: String,
}

#[derive(Error, Debug)]
pub enum BankError {
    /// Unknown id or cross-ownership mismatch. Conflated on purpose so a
    /// caller cannot probe which account ids exist.
    #[error("resource not found")]
    NotFound,

    /// Role violation: the caller lacks the administrative role.
    #[error("operation not permitted")]
    Forbidden,

    /// The mutation would drive the account amount negative.
    #[error("insufficient funds")]
    InsufficientFunds,

    /// Malformed or non-positive input.
    #[error("{0}")]
    BadRequest(String),

    /// Missing or invalid credentials.
    #[error("authentication failed")]
    Unauthorized,

    #[error("internal error: {0}")]
    Internal(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl BankError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    fn status_and_code(&self) -> (StatusCode, i32) {
        match self {
            BankError::NotFound => (StatusCode::NOT_FOUND, error_codes::NOT_FOUND),
            BankError::Forbidden => (StatusCode::FORBIDDEN, error_codes::FORBIDDEN),
            BankError::InsufficientFunds => {
                (StatusCode::BAD_REQUEST, error_codes::INSUFFICIENT_FUNDS)
            }
            BankError::BadRequest(_) => (StatusCode::BAD_REQUEST, error_codes::INVALID_PARAMETER),
            BankError::Unauthorized => (StatusCode::UNAUTHORIZED, error_codes::AUTH_FAILED),
            BankError::Internal(_) | BankError::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                error_codes::INTERNAL_ERROR,
            ),
        }
    }
}

impl IntoResponse for BankError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        // Server-side failures are logged in full but not leaked to clients.
        let msg = match &self {
            BankError::Internal(detail) => {
                tracing::error!("internal error: {}", detail);
                "internal error".to_string()
            }
            BankError::Database(e) => {
                tracing::error!("database error: {}", e);
                "internal error".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(ErrorBody { code, msg })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            BankError::NotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            BankError::Forbidden.into_response().status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            BankError::InsufficientFunds.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            BankError::bad_request("nope").into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            BankError::Unauthorized.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            BankError::internal("boom").into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_database_error_message_not_leaked() {
        let err = BankError::Database(sqlx::Error::RowNotFound);
        let msg = match &err {
            e @ BankError::Database(_) => e.to_string(),
            _ => unreachable!(),
        };
        // The Display impl carries detail; the response body must not.
        assert!(msg.contains("database error"));
        let (status, code) = err.status_and_code();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(code, error_codes::INTERNAL_ERROR);
    }

    #[test]
    fn test_bad_request_preserves_message() {
        let err = BankError::bad_request("amount must be positive");
        assert_eq!(err.to_string(), "amount must be positive");
    }
}
