//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::{AuthenticateInput, AuthenticateUseCase};
use crate::domain::repository::UserStore;
use crate::domain::services::{EmailValidator, PasswordVerifier, TokenIssuer};
use crate::error::AuthError;
use crate::presentation::dto::{LoginRequest, LoginResponse};
use crate::presentation::response;

/// Shared state for the login handler
pub struct LoginAppState<S, V, T, E>
where
    S: UserStore + Send + Sync + 'static,
    V: PasswordVerifier + Send + Sync + 'static,
    T: TokenIssuer + Send + Sync + 'static,
    E: EmailValidator + Send + Sync + 'static,
{
    pub users: Arc<S>,
    pub verifier: Arc<V>,
    pub issuer: Arc<T>,
    pub email_validator: Arc<E>,
}

// Manual Clone: the components themselves need not be Clone
impl<S, V, T, E> Clone for LoginAppState<S, V, T, E>
where
    S: UserStore + Send + Sync + 'static,
    V: PasswordVerifier + Send + Sync + 'static,
    T: TokenIssuer + Send + Sync + 'static,
    E: EmailValidator + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            users: self.users.clone(),
            verifier: self.verifier.clone(),
            issuer: self.issuer.clone(),
            email_validator: self.email_validator.clone(),
        }
    }
}

/// POST /api/login
///
/// Pure translation boundary: validates the request shape, delegates
/// to [`AuthenticateUseCase`] and maps every outcome to a response.
/// Nothing escapes this function as an error; internal faults degrade
/// to a generic 500 so the transport contract stays stable.
pub async fn login<S, V, T, E>(
    State(state): State<LoginAppState<S, V, T, E>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Response
where
    S: UserStore + Send + Sync + 'static,
    V: PasswordVerifier + Send + Sync + 'static,
    T: TokenIssuer + Send + Sync + 'static,
    E: EmailValidator + Send + Sync + 'static,
{
    // Absent or non-JSON body is a caller-side transport fault, kept
    // indistinguishable from a server fault on the wire
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Login request body missing or malformed");
            return response::server_error();
        }
    };

    let email = req.email.unwrap_or_default();
    if email.is_empty() {
        return AuthError::MissingParam("email").into_response();
    }

    let password = req.password.unwrap_or_default();
    if password.is_empty() {
        return AuthError::MissingParam("password").into_response();
    }

    // Reject malformed emails before any collaborator is touched
    if !state.email_validator.is_valid(&email) {
        return AuthError::InvalidParam("email").into_response();
    }

    let use_case = AuthenticateUseCase::new(
        state.users.clone(),
        state.verifier.clone(),
        state.issuer.clone(),
    );

    match use_case.execute(AuthenticateInput { email, password }).await {
        Ok(Some(access_token)) => {
            (StatusCode::OK, Json(LoginResponse { access_token })).into_response()
        }
        Ok(None) => response::unauthorized(),
        Err(e) => e.into_response(),
    }
}
