//! Password encoding and verification.
//!
//! Credentials are stored in whatever representation the configured
//! [`PasswordScheme`] produces, and login compares a submitted password by
//! running it through the same scheme.
//!
//! # Schemes
//!
//! - [`PasswordScheme::Bcrypt`] (default): salted one-way hash.
//! - [`PasswordScheme::Base64`]: reversible Base64 text. This matches how an
//!   older credential store wrote passwords and exists only so such rows keep
//!   working. It is not a hash; anyone with read access to the table can
//!   recover every password. Migrate to bcrypt when possible.

use std::fmt;
use std::str::FromStr;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use bcrypt::{DEFAULT_COST, hash, verify};

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PasswordScheme {
    #[default]
    Bcrypt,
    Base64,
}

impl PasswordScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            PasswordScheme::Bcrypt => "bcrypt",
            PasswordScheme::Base64 => "base64",
        }
    }

    /// Whether the stored form can be turned back into the plain password.
    pub fn is_reversible(&self) -> bool {
        matches!(self, PasswordScheme::Base64)
    }

    /// Produces the representation persisted in `users.password`.
    pub fn encode(&self, password: &str) -> Result<String, AppError> {
        match self {
            PasswordScheme::Bcrypt => hash_password(password),
            PasswordScheme::Base64 => Ok(STANDARD.encode(password.as_bytes())),
        }
    }

    /// Checks a submitted password against a stored representation.
    pub fn matches(&self, password: &str, stored: &str) -> Result<bool, AppError> {
        match self {
            PasswordScheme::Bcrypt => verify_password(password, stored),
            PasswordScheme::Base64 => Ok(STANDARD.encode(password.as_bytes()) == stored),
        }
    }
}

impl fmt::Display for PasswordScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PasswordScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bcrypt" => Ok(PasswordScheme::Bcrypt),
            "base64" => Ok(PasswordScheme::Base64),
            other => Err(format!("Unknown password scheme: {}", other)),
        }
    }
}

pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, DEFAULT_COST)
        .map_err(|e| AppError::internal_error(format!("Failed to hash password: {}", e)))
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    verify(password, hash)
        .map_err(|e| AppError::internal_error(format!("Failed to verify password: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bcrypt_round_trip() {
        let scheme = PasswordScheme::Bcrypt;
        let stored = scheme.encode("correctpassword").unwrap();

        assert_ne!(stored, "correctpassword");
        assert!(scheme.matches("correctpassword", &stored).unwrap());
        assert!(!scheme.matches("wrongpassword", &stored).unwrap());
    }

    #[test]
    fn test_bcrypt_generates_unique_hashes() {
        let first = hash_password("samepassword").unwrap();
        let second = hash_password("samepassword").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_bcrypt_invalid_hash_is_error() {
        let result = PasswordScheme::Bcrypt.matches("password", "not_a_valid_bcrypt_hash");
        assert!(result.is_err());
    }

    #[test]
    fn test_base64_matches_legacy_rows() {
        let scheme = PasswordScheme::Base64;
        // "secret" as written by the legacy store
        assert_eq!(scheme.encode("secret").unwrap(), "c2VjcmV0");
        assert!(scheme.matches("secret", "c2VjcmV0").unwrap());
        assert!(!scheme.matches("Secret", "c2VjcmV0").unwrap());
    }

    #[test]
    fn test_base64_never_errors_on_garbage() {
        let result = PasswordScheme::Base64.matches("secret", "%%%not-base64%%%");
        assert!(!result.unwrap());
    }

    #[test]
    fn test_reversible_flag() {
        assert!(PasswordScheme::Base64.is_reversible());
        assert!(!PasswordScheme::Bcrypt.is_reversible());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("bcrypt".parse::<PasswordScheme>(), Ok(PasswordScheme::Bcrypt));
        assert_eq!(" BASE64 ".parse::<PasswordScheme>(), Ok(PasswordScheme::Base64));
        assert!("md5".parse::<PasswordScheme>().is_err());
    }
}
