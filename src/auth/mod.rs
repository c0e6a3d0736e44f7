//! Authentication and authorization

pub mod handlers;
pub mod middleware;
pub mod service;

pub use service::{AuthResponse, AuthService, Claims, LoginRequest};

use crate::error::BankError;

/// The authenticated caller, as established by the JWT middleware.
#[derive(Debug, Clone)]
pub struct Principal {
    pub user_id: i64,
    pub username: String,
    pub is_admin: bool,
}

impl Principal {
    /// Gate administrative operations
    pub fn require_admin(&self) -> Result<(), BankError> {
        if self.is_admin {
            Ok(())
        } else {
            Err(BankError::Forbidden)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_admin() {
        let admin = Principal {
            user_id: 1,
            username: "root".to_string(),
            is_admin: true,
        };
        assert!(admin.require_admin().is_ok());

        let plain = Principal {
            user_id: 2,
            username: "alice".to_string(),
            is_admin: false,
        };
        assert!(matches!(plain.require_admin(), Err(BankError::Forbidden)));
    }
}
