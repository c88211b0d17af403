use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header, request::Parts},
    middleware::Next,
    response::Response,
};
use reelbase_auth::messages::{
    INVALID_JWT_TOKEN, JWT_TOKEN_EXPIRED, MISSING_AUTHORIZATION_HEADER,
};
use reelbase_auth::{AuthenticatedIdentity, TokenError};
use reelbase_core::AppError;
use reelbase_observability::track_token_rejected;

use crate::state::AppState;

const BEARER_PREFIX: &str = "Bearer ";

/// Returns the token from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Gate in front of every route.
pub async fn jwt_auth_filter(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if state.security_config.is_allowed(req.uri().path()) {
        return Ok(next.run(req).await);
    }

    let Some(token) = bearer_token(req.headers()).map(str::to_owned) else {
        tracing::debug!(path = %req.uri().path(), "Rejected request without bearer token");
        track_token_rejected("missing_header");
        return Err(AppError::unauthorized(MISSING_AUTHORIZATION_HEADER));
    };

    let subject = match state.token_codec.subject_of(&token) {
        Ok(subject) => subject,
        Err(TokenError::Expired) => {
            tracing::info!(path = %req.uri().path(), "Rejected expired token");
            track_token_rejected("expired");
            return Err(AppError::forbidden(JWT_TOKEN_EXPIRED));
        }
        Err(e) => {
            tracing::warn!(path = %req.uri().path(), error = %e, "Rejected invalid token");
            track_token_rejected("invalid");
            return Err(AppError::unauthorized(INVALID_JWT_TOKEN));
        }
    };

    if req.extensions().get::<AuthenticatedIdentity>().is_none() {
        if !state.token_codec.validate(&token, &subject) {
            track_token_rejected("invalid");
            return Err(AppError::unauthorized(INVALID_JWT_TOKEN));
        }
        req.extensions_mut()
            .insert(AuthenticatedIdentity::new(subject));
    }

    Ok(next.run(req).await)
}

/// Extractor for the identity bound by [`jwt_auth_filter`].
#[derive(Debug, Clone)]
pub struct AuthUser(pub AuthenticatedIdentity);

impl AuthUser {
    pub fn username(&self) -> &str {
        &self.0.username
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedIdentity>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| AppError::unauthorized(MISSING_AUTHORIZATION_HEADER))
    }
}
