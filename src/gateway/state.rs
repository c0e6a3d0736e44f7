//! Shared application state for the HTTP gateway

use std::sync::Arc;

use crate::account::Currency;
use crate::auth::AuthService;
use crate::db::Database;

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub auth: Arc<AuthService>,
    /// Currency provisioned for every new user's first account
    pub default_currency: Currency,
}

impl AppState {
    pub fn new(db: Arc<Database>, auth: Arc<AuthService>, default_currency: Currency) -> Self {
        Self {
            db,
            auth,
            default_currency,
        }
    }
}
