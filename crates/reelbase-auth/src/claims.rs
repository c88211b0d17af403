//! Token claim structures.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Name of the custom claim that tells access and refresh tokens apart.
pub const TOKEN_TYPE_CLAIM: &str = "tokenType";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// Access token presented on API calls
    Auth,
    /// Longer-lived token used only at the refresh endpoint
    Refresh,
}

impl TokenType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Auth => "auth",
            TokenType::Refresh => "refresh",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auth" => Ok(TokenType::Auth),
            "refresh" => Ok(TokenType::Refresh),
            other => Err(format!("Unknown token type: {}", other)),
        }
    }
}

/// Signed token payload.
///
/// Registered claims are fixed fields; everything else (including
/// [`TOKEN_TYPE_CLAIM`]) lives in `custom` and is flattened into the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Username the token was issued to
    pub sub: String,
    /// Issued-at (Unix timestamp, seconds)
    pub iat: i64,
    /// Expiry (Unix timestamp, seconds)
    pub exp: i64,
    #[serde(flatten)]
    pub custom: Map<String, Value>,
}

impl TokenClaims {
    pub fn new(subject: &str, token_type: TokenType, iat: i64, exp: i64) -> Self {
        let mut custom = Map::new();
        custom.insert(
            TOKEN_TYPE_CLAIM.to_string(),
            Value::String(token_type.as_str().to_string()),
        );

        Self {
            sub: subject.to_string(),
            iat,
            exp,
            custom,
        }
    }

    pub fn token_type(&self) -> Option<TokenType> {
        self.custom
            .get(TOKEN_TYPE_CLAIM)
            .and_then(Value::as_str)
            .and_then(|s| s.parse().ok())
    }
}
