//! Application Layer
//!
//! Use cases and application services.

pub mod authenticate;
pub mod config;

// Re-exports
pub use authenticate::{AuthenticateInput, AuthenticateUseCase};
pub use config::AuthConfig;
