//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities and the capability traits the pipeline consumes
//! - `application/` - The authenticate use case and configuration
//! - `infra/` - Postgres store, Argon2 verifier, HMAC issuer, email syntax check
//! - `presentation/` - HTTP handler, DTOs, router
//!
//! ## Behavior
//! - `POST /login` authenticates email/password and returns an access token
//! - Unknown email and wrong password are the same 401 outcome
//! - Malformed input maps to structured 400 bodies; internal faults
//!   degrade to a generic 500, never a raw error
//!
//! ## Security Model
//! - Passwords verified against Argon2id PHC hashes
//! - Access tokens signed with HMAC-SHA256
//! - Credential-failure responses do not reveal which half failed

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgUserStore;
pub use presentation::router::{login_router, login_router_generic};
