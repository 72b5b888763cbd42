//! Leaf value types of the user domain.
//!
//! Each type is built through a validating constructor and is complete unless
//! it is its zero (`Default`) value.

use crate::error::{Field, UserError};
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use std::fmt;
use typedd::Complete;
use uuid::Uuid;

/// Identifies a user. The nil UUID is the zero value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(Uuid);

impl UserId {
    /// Wraps a UUID, rejecting the nil UUID.
    pub fn new(uuid: Uuid) -> Result<Self, UserError> {
        if uuid.is_nil() {
            return Err(UserError::parse(Field::Id, "id must not be the nil UUID"));
        }
        Ok(Self(uuid))
    }

    /// A fresh random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parses the textual form of a UUID.
    pub fn parse(raw: &str) -> Result<Self, UserError> {
        let uuid = Uuid::parse_str(raw.trim())
            .map_err(|e| UserError::parse(Field::Id, format!("id is not a UUID: {e}")))?;
        Self::new(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Complete for UserId {
    fn is_complete(&self) -> bool {
        !self.0.is_nil()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// An email address of the form `local@domain.tld`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parses a raw address. Surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> Result<Self, UserError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(UserError::parse(Field::Email, "email address is required"));
        }
        if raw.chars().any(char::is_whitespace) {
            return Err(UserError::parse(Field::Email, "email address must not contain whitespace"));
        }
        let Some((local, domain)) = raw.split_once('@') else {
            return Err(UserError::parse(Field::Email, "email address must contain '@'"));
        };
        if local.is_empty() || domain.contains('@') {
            return Err(UserError::parse(Field::Email, "email address is malformed"));
        }
        let labels_ok = domain.split('.').count() >= 2 && domain.split('.').all(|l| !l.is_empty());
        if !labels_ok {
            return Err(UserError::parse(Field::Email, "email domain is malformed"));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Complete for EmailAddress {
    fn is_complete(&self) -> bool {
        !self.0.is_empty()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Passwords shorter than this are rejected.
pub const MIN_PASSWORD_LEN: usize = 8;
/// Passwords longer than this are rejected.
pub const MAX_PASSWORD_LEN: usize = 72;

/// An Argon2id digest of a password in PHC string format.
#[derive(Default, Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Checks the length bounds and hashes `password` with a fresh salt.
    pub fn from_password(password: &str) -> Result<Self, UserError> {
        if !(MIN_PASSWORD_LEN..=MAX_PASSWORD_LEN).contains(&password.len()) {
            return Err(UserError::parse(
                Field::PasswordHash,
                format!("password must be between {MIN_PASSWORD_LEN} and {MAX_PASSWORD_LEN} characters"),
            ));
        }
        let salt = SaltString::generate(&mut OsRng);
        let digest = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| UserError::parse(Field::PasswordHash, format!("failed to hash password: {e}")))?;
        Ok(Self(digest.to_string()))
    }

    /// True when `password` hashes to this digest.
    pub fn verify(&self, password: &str) -> bool {
        argon2::PasswordHash::new(&self.0)
            .map(|parsed| {
                Argon2::default()
                    .verify_password(password.as_bytes(), &parsed)
                    .is_ok()
            })
            .unwrap_or(false)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Complete for PasswordHash {
    fn is_complete(&self) -> bool {
        !self.0.is_empty()
    }
}

// Digests stay out of logs and error messages.
impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("PasswordHash(<empty>)")
        } else {
            f.write_str("PasswordHash(<redacted>)")
        }
    }
}

/// A free-form biography. Optional, so every value (including empty) is complete.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Bio(String);

impl Bio {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Complete for Bio {
    fn is_complete(&self) -> bool {
        true
    }
}

impl fmt::Display for Bio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_rejects_nil() {
        assert!(UserId::new(Uuid::nil()).is_err());
        assert!(!UserId::default().is_complete());
        assert!(UserId::generate().is_complete());
    }

    #[test]
    fn test_user_id_parse() {
        let id = UserId::generate();
        assert_eq!(UserId::parse(&id.to_string()), Ok(id));
        assert!(matches!(
            UserId::parse("not-a-uuid"),
            Err(UserError::Parse { field: Field::Id, .. })
        ));
        assert!(UserId::parse("00000000-0000-0000-0000-000000000000").is_err());
    }

    #[test]
    fn test_email_parse() {
        let email = EmailAddress::parse("  ada@example.com ").unwrap();
        assert_eq!(email.as_str(), "ada@example.com");
        assert!(email.is_complete());

        for bad in ["", "   ", "ada", "@example.com", "ada@", "ada@example", "a@b@c.com", "a da@x.com", "ada@x..com"] {
            assert!(
                matches!(EmailAddress::parse(bad), Err(UserError::Parse { field: Field::Email, .. })),
                "{bad:?} should be rejected"
            );
        }
        assert!(!EmailAddress::default().is_complete());
    }

    #[test]
    fn test_password_hash_length_bounds() {
        assert!(PasswordHash::from_password("short").is_err());
        assert!(PasswordHash::from_password(&"x".repeat(MAX_PASSWORD_LEN + 1)).is_err());
        assert!(!PasswordHash::default().is_complete());
    }

    #[test]
    fn test_password_hash_verifies_and_redacts() {
        let hash = PasswordHash::from_password("correct horse").unwrap();
        assert!(hash.is_complete());
        assert!(hash.verify("correct horse"));
        assert!(!hash.verify("battery staple"));
        assert_eq!(format!("{hash:?}"), "PasswordHash(<redacted>)");
        assert!(!PasswordHash::default().verify("anything"));
    }

    #[test]
    fn test_bio_is_always_complete() {
        assert!(Bio::default().is_complete());
        assert!(Bio::new("Mathematician").is_complete());
    }
}
