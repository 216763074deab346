//! Login Router

use axum::{Router, routing::post};
use sqlx::PgPool;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserStore;
use crate::domain::services::{EmailValidator, PasswordVerifier, TokenIssuer};
use crate::infra::{Argon2Verifier, HmacTokenIssuer, PgUserStore, SyntaxEmailValidator};
use crate::presentation::handlers::{self, LoginAppState};

/// Create the login router with the production wiring
pub fn login_router(pool: PgPool, config: AuthConfig) -> Router {
    login_router_generic(
        Arc::new(PgUserStore::new(pool)),
        Arc::new(Argon2Verifier),
        Arc::new(HmacTokenIssuer::new(&config)),
        Arc::new(SyntaxEmailValidator),
    )
}

/// Create a login router for any set of collaborator implementations
pub fn login_router_generic<S, V, T, E>(
    users: Arc<S>,
    verifier: Arc<V>,
    issuer: Arc<T>,
    email_validator: Arc<E>,
) -> Router
where
    S: UserStore + Send + Sync + 'static,
    V: PasswordVerifier + Send + Sync + 'static,
    T: TokenIssuer + Send + Sync + 'static,
    E: EmailValidator + Send + Sync + 'static,
{
    let state = LoginAppState {
        users,
        verifier,
        issuer,
        email_validator,
    };

    Router::new()
        .route("/login", post(handlers::login::<S, V, T, E>))
        .with_state(state)
}
