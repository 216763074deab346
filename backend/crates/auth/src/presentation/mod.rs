//! Presentation Layer
//!
//! HTTP handlers, DTOs, response helpers and router.

pub mod dto;
pub mod handlers;
pub mod response;
pub mod router;

pub use handlers::LoginAppState;
pub use router::{login_router, login_router_generic};
