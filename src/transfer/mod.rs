//! Inter-account transfers

pub mod handlers;
pub mod models;
pub mod service;

pub use models::TransferRequest;
pub use service::TransferService;
