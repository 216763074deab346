//! Authenticate Use Case
//!
//! Validates credentials, locates the user, verifies the password and
//! mints an access token. The four steps run strictly in order and
//! each collaborator is awaited before the next is touched.
//!
//! "Unknown email" and "wrong password" both resolve to `Ok(None)` so
//! the outcome never reveals which half of the credential failed.

use std::sync::Arc;

use crate::domain::entities::AccessToken;
use crate::domain::repository::UserStore;
use crate::domain::services::{PasswordVerifier, TokenIssuer};
use crate::error::{AuthError, AuthResult};

/// Authenticate input
#[derive(Debug, Clone)]
pub struct AuthenticateInput {
    /// Login email
    pub email: String,
    /// Plaintext password
    pub password: String,
}

/// Authenticate use case
///
/// All three collaborators are mandatory; a pipeline with a missing or
/// incapable collaborator is unrepresentable.
pub struct AuthenticateUseCase<S, V, T>
where
    S: UserStore,
    V: PasswordVerifier,
    T: TokenIssuer,
{
    users: Arc<S>,
    verifier: Arc<V>,
    issuer: Arc<T>,
}

impl<S, V, T> AuthenticateUseCase<S, V, T>
where
    S: UserStore,
    V: PasswordVerifier,
    T: TokenIssuer,
{
    pub fn new(users: Arc<S>, verifier: Arc<V>, issuer: Arc<T>) -> Self {
        Self {
            users,
            verifier,
            issuer,
        }
    }

    /// Run the pipeline
    ///
    /// `Ok(None)` is the normal "credentials rejected" outcome. Errors
    /// are reserved for missing inputs and collaborator faults.
    pub async fn execute(&self, input: AuthenticateInput) -> AuthResult<Option<AccessToken>> {
        if input.email.is_empty() {
            return Err(AuthError::MissingParam("email"));
        }
        if input.password.is_empty() {
            return Err(AuthError::MissingParam("password"));
        }

        let Some(user) = self.users.find_by_email(&input.email).await? else {
            tracing::debug!("Login attempt for unknown email");
            return Ok(None);
        };

        if !self
            .verifier
            .verify(&input.password, &user.password_hash)
            .await?
        {
            tracing::warn!(user_id = %user.user_id, "Invalid login attempt");
            return Ok(None);
        }

        let token = self.issuer.issue(user.user_id).await?;

        // A wired issuer must produce a usable token
        if token.is_empty() {
            return Err(AuthError::Internal(
                "Token issuer returned an empty token".to_string(),
            ));
        }

        tracing::info!(user_id = %user.user_id, "User authenticated");

        Ok(Some(AccessToken::new(token)))
    }
}
