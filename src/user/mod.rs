//! User store and administration

pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

pub use models::{CreateUserRequest, User, UserProfile, UserRole};
pub use repository::UserRepository;
pub use service::UserService;
