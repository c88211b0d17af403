//! Authentication request and response bodies.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

// Re-export token types so handlers can depend on models alone
pub use reelbase_auth::{AuthenticatedIdentity, TokenClaims, TokenType};

pub const TOKEN_GENERATED_MESSAGE: &str = "token generated";

/// Login request.
///
/// Missing fields deserialize as blank strings so that they are rejected as
/// bad credentials (401) instead of as a malformed body.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    #[schema(example = "alice")]
    pub username: String,
    #[serde(default)]
    #[schema(example = "password123")]
    pub password: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    #[serde(default)]
    pub refresh_token: String,
}

/// Access and refresh token pair.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JwtResponse {
    /// Access token for the `Authorization: Bearer` header
    pub token: String,
    /// Token accepted by `/auth/token-refresh`
    pub refresh_token: String,
    #[schema(example = "token generated")]
    pub message: String,
}

impl JwtResponse {
    pub fn new(token: String, refresh_token: String) -> Self {
        Self {
            token,
            refresh_token,
            message: TOKEN_GENERATED_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_missing_fields_are_blank() {
        let req: LoginRequest = serde_json::from_str(r#"{"username":"alice"}"#).unwrap();
        assert_eq!(req.username, "alice");
        assert!(req.password.is_empty());
    }

    #[test]
    fn test_refresh_request_uses_camel_case() {
        let req: RefreshTokenRequest =
            serde_json::from_str(r#"{"refreshToken":"abc.def.ghi"}"#).unwrap();
        assert_eq!(req.refresh_token, "abc.def.ghi");
    }

    #[test]
    fn test_jwt_response_shape() {
        let json = serde_json::to_value(JwtResponse::new("a".into(), "r".into())).unwrap();
        assert_eq!(json["token"], "a");
        assert_eq!(json["refreshToken"], "r");
        assert_eq!(json["message"], "token generated");
    }
}
