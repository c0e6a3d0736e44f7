//! Data models for users

use crate::account::AccountSnapshot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i16)]
pub enum UserRole {
    User = 0,
    Admin = 1,
}

impl UserRole {
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

impl From<i16> for UserRole {
    fn from(v: i16) -> Self {
        match v {
            1 => UserRole::Admin,
            _ => UserRole::User,
        }
    }
}

/// User record
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: i64,
    pub username: String,
    pub password_hash: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

/// User profile returned by the HTTP boundary, accounts nested
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct UserProfile {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "alice")]
    pub username: String,
    pub accounts: Vec<AccountSnapshot>,
}

/// User creation request (administrative)
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateUserRequest {
    #[schema(example = "alice")]
    pub username: String,
    #[schema(example = "s3cret")]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_role_from_i16() {
        assert_eq!(UserRole::from(0), UserRole::User);
        assert_eq!(UserRole::from(1), UserRole::Admin);
        assert_eq!(UserRole::from(99), UserRole::User); // default to ordinary
    }

    #[test]
    fn test_is_admin() {
        assert!(UserRole::Admin.is_admin());
        assert!(!UserRole::User.is_admin());
    }

    #[test]
    fn test_profile_serializes_nested_accounts() {
        let profile = UserProfile {
            id: 3,
            username: "bob".to_string(),
            accounts: vec![],
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["username"], "bob");
        assert!(json["accounts"].is_array());
    }
}
