use anyhow::anyhow;
use reelbase_auth::messages::JWT_TOKEN_EXPIRED;
use reelbase_auth::{TOKEN_TYPE_CLAIM, TokenCodec, TokenError, TokenType};
use reelbase_core::{AppError, PasswordScheme};
use reelbase_observability::{
    track_login_failure, track_login_success, track_token_issued, track_token_rejected,
};
use sqlx::PgPool;
use tracing::instrument;

use super::model::{Credential, JwtResponse, LoginRequest, RefreshTokenRequest};

pub const INVALID_PARAMETERS: &str = "INVALID_PARAMETERS";
pub const INVALID_CREDENTIALS: &str = "Invalid credentials, user not found";
pub const INVALID_REFRESH_TOKEN: &str = "Invalid refresh token";
pub const REFRESH_TOKEN_REQUIRED: &str = "Refresh token is required";

/// Checks a submitted password against the stored credential.
///
/// A missing record and a wrong password fail identically.
pub fn verify_credentials(
    record: Option<&Credential>,
    password: &str,
    scheme: PasswordScheme,
) -> Result<(), AppError> {
    let Some(record) = record else {
        track_login_failure("unknown_user");
        return Err(AppError::unauthorized(INVALID_CREDENTIALS));
    };

    let matches = scheme.matches(password, &record.password).unwrap_or_else(|e| {
        tracing::warn!(username = %record.username, error = %e, "Stored password is unreadable");
        false
    });

    if !matches {
        track_login_failure("bad_password");
        return Err(AppError::unauthorized(INVALID_CREDENTIALS));
    }

    Ok(())
}

/// Issues an access token and a refresh token for `subject`.
pub fn issue_token_pair(codec: &TokenCodec, subject: &str) -> Result<JwtResponse, AppError> {
    let token = codec
        .issue(subject, TokenType::Auth)
        .map_err(AppError::internal)?;
    let refresh_token = codec
        .issue(subject, TokenType::Refresh)
        .map_err(AppError::internal)?;

    track_token_issued(TokenType::Auth.as_str());
    track_token_issued(TokenType::Refresh.as_str());

    Ok(JwtResponse::new(token, refresh_token))
}

pub struct AuthService;

impl AuthService {
    #[instrument(skip(db, codec, dto))]
    pub async fn login(
        db: &PgPool,
        codec: &TokenCodec,
        scheme: PasswordScheme,
        dto: LoginRequest,
    ) -> Result<JwtResponse, AppError> {
        if dto.username.trim().is_empty() || dto.password.trim().is_empty() {
            track_login_failure("blank_parameters");
            return Err(AppError::unauthorized(INVALID_PARAMETERS));
        }

        let record = sqlx::query_as::<_, Credential>(
            "SELECT username, password FROM users WHERE username = $1",
        )
        .bind(&dto.username)
        .fetch_optional(db)
        .await?;

        verify_credentials(record.as_ref(), &dto.password, scheme).inspect_err(|_| {
            tracing::info!(username = %dto.username, "Login rejected");
        })?;

        let response = issue_token_pair(codec, &dto.username)?;
        track_login_success();
        tracing::info!(username = %dto.username, "Login succeeded");

        Ok(response)
    }

    #[instrument(skip(codec, dto))]
    pub fn refresh(codec: &TokenCodec, dto: RefreshTokenRequest) -> Result<JwtResponse, AppError> {
        let token = dto.refresh_token.trim();
        if token.is_empty() {
            return Err(AppError::bad_request(anyhow!(REFRESH_TOKEN_REQUIRED)));
        }

        // Signature is checked here; expiry is checked below
        let is_refresh = codec
            .claim(token, TOKEN_TYPE_CLAIM)
            .ok()
            .and_then(|value| value.as_str().map(|s| s == TokenType::Refresh.as_str()))
            .unwrap_or(false);

        if !is_refresh {
            track_token_rejected("not_refresh");
            return Err(AppError::unauthorized(INVALID_REFRESH_TOKEN));
        }

        if codec.is_expired(token) {
            track_token_rejected("expired");
            return Err(AppError::forbidden(JWT_TOKEN_EXPIRED));
        }

        let subject = codec.subject_of(token).map_err(|e| match e {
            TokenError::Expired => AppError::forbidden(JWT_TOKEN_EXPIRED),
            _ => AppError::unauthorized(INVALID_REFRESH_TOKEN),
        })?;

        tracing::info!(username = %subject, "Refresh token exchanged");
        issue_token_pair(codec, &subject)
    }
}
