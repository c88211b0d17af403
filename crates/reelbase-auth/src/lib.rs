//! # Reelbase Auth
//!
//! Token handling for the Reelbase API.
//!
//! - [`claims`]: Signed payload carried by every token
//! - [`jwt`]: [`TokenCodec`], which issues and reads tokens
//! - [`identity`]: The request-scoped identity bound by the auth filter
//!
//! # Example
//!
//! ```ignore
//! use reelbase_auth::{TokenCodec, TokenType};
//! use reelbase_config::JwtConfig;
//!
//! let codec = TokenCodec::new(&JwtConfig::from_env());
//! let token = codec.issue("alice", TokenType::Auth)?;
//! assert_eq!(codec.subject_of(&token)?, "alice");
//! ```

pub mod claims;
pub mod identity;
pub mod jwt;

/// Messages returned to clients when a request's token is rejected.
pub mod messages {
    pub const MISSING_AUTHORIZATION_HEADER: &str = "MISSING_AUTHORIZATION_HEADER";
    pub const INVALID_JWT_TOKEN: &str = "INVALID_JWT_TOKEN";
    pub const JWT_TOKEN_EXPIRED: &str = "JWT_TOKEN_EXPIRED";
}

// Re-export commonly used types at crate root
pub use claims::{TOKEN_TYPE_CLAIM, TokenClaims, TokenType};
pub use identity::AuthenticatedIdentity;
pub use jwt::{TokenCodec, TokenError};
