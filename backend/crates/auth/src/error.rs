//! Auth Error Types
//!
//! Taxonomy for the authentication pipeline. Client faults carry the
//! offending parameter name; internal faults degrade to a generic
//! server-fault body so nothing about the wiring leaks to callers.
//!
//! Failed credentials are deliberately NOT an error variant: the use
//! case reports them as `Ok(None)` and the handler maps that to 401.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::presentation::dto::ErrorResponse;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Required input absent or empty
    #[error("Missing param: {0}")]
    MissingParam(&'static str),

    /// Input present but semantically invalid (e.g., malformed email)
    #[error("Invalid param: {0}")]
    InvalidParam(&'static str),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingParam(_) | AuthError::InvalidParam(_) => StatusCode::BAD_REQUEST,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Auth request rejected");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status_code();

        // Server faults never expose internals to the client
        let message = if status.is_server_error() {
            "Internal Server Error".to_string()
        } else {
            self.to_string()
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
