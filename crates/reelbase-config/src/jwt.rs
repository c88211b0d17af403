//! JWT signing configuration.
//!
//! # Environment Variables
//!
//! - `JWT_SECRET`: Secret the HS512 signing key is derived from
//! - `JWT_EXPIRATION_SECS`: Access-token lifetime in seconds (default: 3600).
//!   Refresh tokens live twice as long. Values outside
//!   `1..=MAX_EXPIRATION_SECS` fall back to the default.

use std::env;

pub const DEFAULT_EXPIRATION_SECS: i64 = 3600;
/// One year.
pub const MAX_EXPIRATION_SECS: i64 = 365 * 24 * 60 * 60;

fn parse_expiration_secs(raw: Option<&str>) -> i64 {
    let Some(raw) = raw else {
        return DEFAULT_EXPIRATION_SECS;
    };

    match raw.trim().parse::<i64>() {
        Ok(secs) if (1..=MAX_EXPIRATION_SECS).contains(&secs) => secs,
        _ => {
            tracing::warn!(
                value = raw,
                default = DEFAULT_EXPIRATION_SECS,
                "JWT_EXPIRATION_SECS out of range, using default"
            );
            DEFAULT_EXPIRATION_SECS
        }
    }
}

#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_secs: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        let expiration_secs = parse_expiration_secs(env::var("JWT_EXPIRATION_SECS").ok().as_deref());

        let secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set, falling back to the development secret");
            "reelbase-development-secret-change-me".to_string()
        });

        Self {
            secret,
            expiration_secs,
        }
    }

    /// Lifetime of refresh tokens in seconds.
    pub fn refresh_expiration_secs(&self) -> i64 {
        self.expiration_secs.saturating_mul(2)
    }
}

// The secret never shows up in logs or `{:?}` output.
impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("expiration_secs", &self.expiration_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_expiration_is_double() {
        let config = JwtConfig {
            secret: "secret".to_string(),
            expiration_secs: 900,
        };
        assert_eq!(config.refresh_expiration_secs(), 1800);
    }

    #[test]
    fn test_parse_expiration_secs_bounds() {
        assert_eq!(parse_expiration_secs(None), DEFAULT_EXPIRATION_SECS);
        assert_eq!(parse_expiration_secs(Some("900")), 900);
        assert_eq!(parse_expiration_secs(Some("0")), DEFAULT_EXPIRATION_SECS);
        assert_eq!(parse_expiration_secs(Some("-5")), DEFAULT_EXPIRATION_SECS);
        assert_eq!(parse_expiration_secs(Some("soon")), DEFAULT_EXPIRATION_SECS);
        assert_eq!(
            parse_expiration_secs(Some(&MAX_EXPIRATION_SECS.to_string())),
            MAX_EXPIRATION_SECS
        );
        assert_eq!(
            parse_expiration_secs(Some(&i64::MAX.to_string())),
            DEFAULT_EXPIRATION_SECS
        );
    }

    #[test]
    fn test_refresh_expiration_saturates() {
        let config = JwtConfig {
            secret: "secret".to_string(),
            expiration_secs: i64::MAX,
        };
        assert_eq!(config.refresh_expiration_secs(), i64::MAX);
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = JwtConfig {
            secret: "super-secret-value".to_string(),
            expiration_secs: 60,
        };
        let debug_str = format!("{:?}", config);
        assert!(!debug_str.contains("super-secret-value"));
        assert!(debug_str.contains("<redacted>"));
    }
}
