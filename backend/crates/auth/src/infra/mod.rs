//! Infrastructure Layer
//!
//! Database implementations and concrete collaborator adapters.

pub mod email;
pub mod password;
pub mod postgres;
pub mod token;

pub use email::SyntaxEmailValidator;
pub use password::Argon2Verifier;
pub use postgres::PgUserStore;
pub use token::HmacTokenIssuer;
