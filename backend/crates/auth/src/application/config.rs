//! Auth Configuration

use platform::crypto::random_bytes;

/// Configuration for the auth module
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HMAC secret for access token signing (32 bytes)
    pub token_secret: [u8; 32],
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: [0u8; 32],
        }
    }
}

impl AuthConfig {
    /// Create config with a random token secret
    pub fn with_random_secret() -> Self {
        let bytes = random_bytes(32);
        let mut secret = [0u8; 32];
        secret.copy_from_slice(&bytes);

        Self {
            token_secret: secret,
        }
    }

    /// Development config (random secret, fresh per process)
    pub fn development() -> Self {
        Self::with_random_secret()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_random_secret() {
        let config1 = AuthConfig::with_random_secret();
        let config2 = AuthConfig::with_random_secret();

        assert_ne!(config1.token_secret, config2.token_secret);
        assert!(config1.token_secret.iter().any(|&b| b != 0));
    }
}
