//! Domain Entities

use serde::Serialize;
use uuid::Uuid;

/// User account as read from the user store
///
/// The pipeline only ever reads this record; account lifecycle is
/// owned elsewhere.
#[derive(Debug, Clone)]
pub struct User {
    /// Opaque identifier, only relayed to the token issuer
    pub user_id: Uuid,
    /// Login email, stored lowercase
    pub email: String,
    /// PHC-formatted password hash
    pub password_hash: String,
}

/// Opaque access token minted per successful authentication
///
/// The core does not persist or track tokens; format and lifecycle
/// belong to the issuer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
