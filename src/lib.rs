//! minibank - a small banking back-end
//!
//! Accounts, deposits, withdrawals and atomic inter-account transfers over
//! HTTP, backed by PostgreSQL.
//!
//! # Modules
//!
//! - [`account`] - Account store and the balance mutation primitive
//! - [`transfer`] - Atomic two-leg transfer executor
//! - [`user`] - User store and administration
//! - [`auth`] - Login, JWT verification, access control
//! - [`gateway`] - axum HTTP boundary
//! - [`db`] - PostgreSQL pool and schema bootstrap
//! - [`config`] - YAML application config
//! - [`error`] - Error taxonomy and HTTP status mapping

pub mod account;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod gateway;
pub mod logging;
pub mod transfer;
pub mod user;

// Convenient re-exports at crate root
pub use account::{Account, BalanceService, Currency};
pub use auth::{AuthService, Principal};
pub use config::AppConfig;
pub use db::Database;
pub use error::BankError;
pub use transfer::TransferService;
pub use user::UserService;
