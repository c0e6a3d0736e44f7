//! Account store and the balance mutation primitive

pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

pub use models::{Account, AccountSnapshot, BalanceChangeRequest, Currency};
pub use repository::AccountRepository;
pub use service::BalanceService;
