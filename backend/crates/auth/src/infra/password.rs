//! Argon2 Password Verifier

use platform::password::{ClearTextPassword, HashedPassword};

use crate::domain::services::PasswordVerifier;
use crate::error::{AuthError, AuthResult};

/// Argon2id-backed [`PasswordVerifier`]
///
/// A stored hash that fails to parse as a PHC string is an internal
/// fault (corrupt row), while a well-formed submitted password that
/// does not match is the normal `Ok(false)` outcome.
#[derive(Debug, Clone, Default)]
pub struct Argon2Verifier;

impl PasswordVerifier for Argon2Verifier {
    async fn verify(&self, plain: &str, hashed: &str) -> AuthResult<bool> {
        let hashed = HashedPassword::from_phc_string(hashed)
            .map_err(|e| AuthError::Internal(format!("Stored password hash invalid: {e}")))?;

        // Empty or oversized submissions can never match a real hash
        let Ok(plain) = ClearTextPassword::new(plain.to_string()) else {
            return Ok(false);
        };

        Ok(hashed.verify(&plain))
    }
}
