//! Capability Traits
//!
//! Narrow contracts for the external primitives the pipeline consumes.
//! Each is injected at construction, so a pipeline cannot be built
//! with a missing or incapable collaborator.

use uuid::Uuid;

use crate::error::AuthResult;

/// Compares a submitted plaintext secret against a stored hash
///
/// May suspend while awaiting a crypto primitive or remote service.
/// `Ok(false)` is the normal "wrong password" outcome; errors are
/// reserved for the primitive itself failing.
#[trait_variant::make(PasswordVerifier: Send)]
pub trait LocalPasswordVerifier {
    async fn verify(&self, plain: &str, hashed: &str) -> AuthResult<bool>;
}

/// Mints an opaque access token for an authenticated user
#[trait_variant::make(TokenIssuer: Send)]
pub trait LocalTokenIssuer {
    async fn issue(&self, user_id: Uuid) -> AuthResult<String>;
}

/// Syntax-level email check, applied at the transport boundary before
/// the pipeline runs
pub trait EmailValidator {
    fn is_valid(&self, email: &str) -> bool;
}
