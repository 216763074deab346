//! HMAC Access Token Issuer

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::domain::services::TokenIssuer;
use crate::error::AuthResult;

/// Issues `"{user_id}.{signature}"` tokens signed with HMAC-SHA256
#[derive(Debug, Clone)]
pub struct HmacTokenIssuer {
    secret: [u8; 32],
}

impl HmacTokenIssuer {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            secret: config.token_secret,
        }
    }
}

impl TokenIssuer for HmacTokenIssuer {
    async fn issue(&self, user_id: Uuid) -> AuthResult<String> {
        let subject = user_id.to_string();

        let mut mac = Hmac::<Sha256>::new_from_slice(&self.secret)
            .expect("HMAC can take key of any size");
        mac.update(subject.as_bytes());
        let signature = mac.finalize().into_bytes();

        Ok(format!("{}.{}", subject, URL_SAFE_NO_PAD.encode(signature)))
    }
}
