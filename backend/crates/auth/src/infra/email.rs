//! Syntax Email Validator
//!
//! Basic format validation only - actual ownership is proven elsewhere
//! (e.g., via confirmation mail).

use crate::domain::services::EmailValidator;

/// Maximum email length (per RFC 5321)
const EMAIL_MAX_LENGTH: usize = 254;

/// Structural email check: one `@`, bounded local part, dotted domain
#[derive(Debug, Clone, Default)]
pub struct SyntaxEmailValidator;

impl EmailValidator for SyntaxEmailValidator {
    fn is_valid(&self, email: &str) -> bool {
        if email.is_empty() || email.len() > EMAIL_MAX_LENGTH {
            return false;
        }

        // Must contain exactly one @
        let parts: Vec<&str> = email.split('@').collect();
        if parts.len() != 2 {
            return false;
        }

        let local = parts[0];
        let domain = parts[1];

        // Local part checks
        if local.is_empty() || local.len() > 64 {
            return false;
        }

        // Domain checks
        if domain.is_empty() || !domain.contains('.') {
            return false;
        }

        if !domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        {
            return false;
        }

        // Domain shouldn't start or end with dot or hyphen
        if domain.starts_with('.') || domain.ends_with('.') {
            return false;
        }
        if domain.starts_with('-') || domain.ends_with('-') {
            return false;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        let sut = SyntaxEmailValidator;
        assert!(sut.is_valid("user@example.com"));
        assert!(sut.is_valid("user.name@example.co.jp"));
        assert!(sut.is_valid("user+tag@example.com"));
    }

    #[test]
    fn test_invalid_emails() {
        let sut = SyntaxEmailValidator;
        assert!(!sut.is_valid(""));
        assert!(!sut.is_valid("userexample.com"));
        assert!(!sut.is_valid("user@"));
        assert!(!sut.is_valid("@example.com"));
        assert!(!sut.is_valid("user@@example.com"));
        assert!(!sut.is_valid("user@example"));
        assert!(!sut.is_valid("user@.example.com"));
        assert!(!sut.is_valid("user@example.com."));
        assert!(!sut.is_valid("user@-example.com"));
        assert!(!sut.is_valid("user@exa mple.com"));
    }

    #[test]
    fn test_length_limits() {
        let sut = SyntaxEmailValidator;

        let long_local = format!("{}@example.com", "a".repeat(65));
        assert!(!sut.is_valid(&long_local));

        let long_email = format!("user@{}.com", "a".repeat(EMAIL_MAX_LENGTH));
        assert!(!sut.is_valid(&long_email));
    }
}
