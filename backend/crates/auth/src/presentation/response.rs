//! Response Helpers
//!
//! Fixed transport responses for the outcomes that are not carried by
//! an [`AuthError`](crate::error::AuthError): credential rejection and
//! the generic server fault.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::presentation::dto::ErrorResponse;

/// 401 with the unauthorized body
pub fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorResponse {
            error: "Unauthorized".to_string(),
        }),
    )
        .into_response()
}

/// 500 with the generic server-fault body
pub fn server_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "Internal Server Error".to_string(),
        }),
    )
        .into_response()
}
