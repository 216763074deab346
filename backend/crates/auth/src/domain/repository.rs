//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entities::User;
use crate::error::AuthResult;

/// Read-only user lookup
///
/// `Ok(None)` means "no such account" and is a normal outcome for the
/// pipeline, not a fault. Store failures (connection loss, bad rows)
/// propagate as errors and surface to clients as a generic 500.
#[trait_variant::make(UserStore: Send)]
pub trait LocalUserStore {
    /// Find user by email
    async fn find_by_email(&self, email: &str) -> AuthResult<Option<User>>;
}
