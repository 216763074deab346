//! Domain Layer
//!
//! Contains entities and the capability traits the pipeline consumes.

pub mod entities;
pub mod repository;
pub mod services;

// Re-exports
pub use entities::{AccessToken, User};
pub use repository::UserStore;
pub use services::{EmailValidator, PasswordVerifier, TokenIssuer};
