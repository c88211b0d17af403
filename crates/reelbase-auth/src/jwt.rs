//! Issuing and reading signed tokens.
//!
//! Tokens are compact JWTs signed with HS512. The signing key is the SHA-512
//! digest of the configured secret, so any secret length yields a 512-bit key.
//!
//! Access tokens live for `JWT_EXPIRATION_SECS`; refresh tokens for twice
//! that. Both carry the subject (username) and a `tokenType` claim.
//!
//! # Example
//!
//! ```ignore
//! let codec = TokenCodec::new(&jwt_config);
//! let refresh = codec.issue("alice", TokenType::Refresh)?;
//!
//! match codec.subject_of(&refresh) {
//!     Ok(username) => { /* still valid */ }
//!     Err(TokenError::Expired) => { /* ask the client to log in again */ }
//!     Err(_) => { /* reject */ }
//! }
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde_json::Value;
use sha2::{Digest, Sha512};
use thiserror::Error;

use reelbase_config::JwtConfig;

use crate::claims::{TokenClaims, TokenType};

const ALGORITHM: Algorithm = Algorithm::HS512;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    /// Signature does not verify or the token is malformed.
    #[error("token is invalid")]
    Invalid,
    #[error("token has expired")]
    Expired,
    #[error("claim '{0}' is missing")]
    ClaimMissing(String),
    #[error("failed to sign token: {0}")]
    Signing(String),
}

#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiration_secs: i64,
    refresh_expiration_secs: i64,
}

impl TokenCodec {
    pub fn new(config: &JwtConfig) -> Self {
        let key = Sha512::digest(config.secret.as_bytes());

        Self {
            encoding_key: EncodingKey::from_secret(key.as_slice()),
            decoding_key: DecodingKey::from_secret(key.as_slice()),
            expiration_secs: config.expiration_secs,
            refresh_expiration_secs: config.refresh_expiration_secs(),
        }
    }

    pub fn lifetime_secs(&self, token_type: TokenType) -> i64 {
        match token_type {
            TokenType::Auth => self.expiration_secs,
            TokenType::Refresh => self.refresh_expiration_secs,
        }
    }

    pub fn issue(&self, subject: &str, token_type: TokenType) -> Result<String, TokenError> {
        self.issue_at(subject, token_type, Utc::now())
    }

    /// Issues a token as if it had been created at `issued_at`.
    pub fn issue_at(
        &self,
        subject: &str,
        token_type: TokenType,
        issued_at: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let iat = issued_at.timestamp();
        let exp = iat
            .checked_add(self.lifetime_secs(token_type))
            .ok_or_else(|| TokenError::Signing("token expiry out of range".to_string()))?;
        let claims = TokenClaims::new(subject, token_type, iat, exp);

        encode(&Header::new(ALGORITHM), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Verifies signature and expiry and returns the subject.
    pub fn subject_of(&self, token: &str) -> Result<String, TokenError> {
        let mut validation = Validation::new(ALGORITHM);
        validation.leeway = 0;

        decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims.sub)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })
    }

    /// Unreadable tokens count as expired.
    pub fn is_expired(&self, token: &str) -> bool {
        match self.claims_ignoring_expiry(token) {
            Ok(claims) => claims.exp < Utc::now().timestamp(),
            Err(_) => true,
        }
    }

    /// Returns a custom claim. The signature is checked, expiry is not.
    pub fn claim(&self, token: &str, key: &str) -> Result<Value, TokenError> {
        let mut claims = self.claims_ignoring_expiry(token)?;
        claims
            .custom
            .remove(key)
            .ok_or_else(|| TokenError::ClaimMissing(key.to_string()))
    }

    /// True when the token belongs to `expected_subject` and has not expired.
    pub fn validate(&self, token: &str, expected_subject: &str) -> bool {
        match self.subject_of(token) {
            Ok(subject) => subject == expected_subject && !self.is_expired(token),
            Err(_) => false,
        }
    }

    fn claims_ignoring_expiry(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(ALGORITHM);
        validation.validate_exp = false;

        decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|_| TokenError::Invalid)
    }
}

impl fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenCodec")
            .field("algorithm", &ALGORITHM)
            .field("expiration_secs", &self.expiration_secs)
            .field("refresh_expiration_secs", &self.refresh_expiration_secs)
            .finish_non_exhaustive()
    }
}
