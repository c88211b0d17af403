use axum::Json;
use axum::extract::State;
use reelbase_core::{AppError, ErrorResponse};
use tracing::instrument;

use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::model::{JwtResponse, LoginRequest, RefreshTokenRequest};
use super::service::AuthService;

/// Exchange username and password for an access/refresh token pair
#[utoipa::path(
    post,
    path = "/auth/generate-token",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Tokens issued", body = JwtResponse),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 401, description = "Blank fields or invalid credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto), fields(username = %dto.username))]
pub async fn generate_token(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<JwtResponse>, AppError> {
    let response = AuthService::login(
        &state.db,
        &state.token_codec,
        state.security_config.password_scheme,
        dto,
    )
    .await?;
    Ok(Json(response))
}

/// Exchange a refresh token for a new token pair
#[utoipa::path(
    post,
    path = "/auth/token-refresh",
    request_body = RefreshTokenRequest,
    responses(
        (status = 200, description = "Tokens reissued", body = JwtResponse),
        (status = 400, description = "Refresh token missing", body = ErrorResponse),
        (status = 401, description = "Not a refresh token", body = ErrorResponse),
        (status = 403, description = "Refresh token expired", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn refresh_token(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RefreshTokenRequest>,
) -> Result<Json<JwtResponse>, AppError> {
    let response = AuthService::refresh(&state.token_codec, dto)?;
    Ok(Json(response))
}
