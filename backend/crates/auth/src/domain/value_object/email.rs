//! Email Value Object
//!
//! Canonical (lowercased, trimmed) email address. Uniqueness in the
//! database is enforced against this canonical form, so `User@Example.com`
//! and `user@example.com` are the same account.

use std::fmt;

use thiserror::Error;

/// Maximum total length per RFC 5321
const MAX_EMAIL_LENGTH: usize = 254;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmailError {
    #[error("Email cannot be empty")]
    Empty,

    #[error("Email must be at most {MAX_EMAIL_LENGTH} characters")]
    TooLong,

    #[error("Email format is invalid")]
    InvalidFormat,
}

/// Validated, canonicalized email address
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Validate and canonicalize an email address.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, EmailError> {
        let canonical = raw.as_ref().trim().to_lowercase();

        if canonical.is_empty() {
            return Err(EmailError::Empty);
        }

        if canonical.len() > MAX_EMAIL_LENGTH {
            return Err(EmailError::TooLong);
        }

        // Structural check only; deliverability is not our concern
        let (local, domain) = canonical.split_once('@').ok_or(EmailError::InvalidFormat)?;

        if local.is_empty() || domain.is_empty() {
            return Err(EmailError::InvalidFormat);
        }

        if domain.contains('@') || !domain.contains('.') {
            return Err(EmailError::InvalidFormat);
        }

        if domain.starts_with('.') || domain.ends_with('.') {
            return Err(EmailError::InvalidFormat);
        }

        if canonical.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(EmailError::InvalidFormat);
        }

        Ok(Self(canonical))
    }

    /// Reconstruct from a trusted database value.
    pub fn from_db(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email_is_canonicalized() {
        let email = Email::new("  Alice@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "alice@example.com");
    }

    #[test]
    fn test_case_insensitive_equality() {
        assert_eq!(
            Email::new("Bob@example.com").unwrap(),
            Email::new("bob@EXAMPLE.com").unwrap()
        );
    }

    #[test]
    fn test_rejects_malformed() {
        assert_eq!(Email::new(""), Err(EmailError::Empty));
        assert_eq!(Email::new("no-at-sign"), Err(EmailError::InvalidFormat));
        assert_eq!(Email::new("@example.com"), Err(EmailError::InvalidFormat));
        assert_eq!(Email::new("user@"), Err(EmailError::InvalidFormat));
        assert_eq!(Email::new("user@nodot"), Err(EmailError::InvalidFormat));
        assert_eq!(Email::new("user@.example.com"), Err(EmailError::InvalidFormat));
        assert_eq!(Email::new("a b@example.com"), Err(EmailError::InvalidFormat));
    }

    #[test]
    fn test_rejects_overlong() {
        let long = format!("{}@example.com", "x".repeat(250));
        assert_eq!(Email::new(long), Err(EmailError::TooLong));
    }
}
