use axum::Json;
use axum::extract::State;
use reelbase_core::{AppError, ErrorResponse};
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validator::{ValidatedPath, ValidatedQuery};

use super::model::{EngagementQuery, EngagementResponse, EngagementStatsResponse};
use super::service::EngagementService;

/// Record an impression or a view for the calling user
#[utoipa::path(
    post,
    path = "/api/engagements/{video_id}",
    params(
        ("video_id" = i64, Path, description = "Video ID"),
        EngagementQuery
    ),
    responses(
        (status = 200, description = "Engagement recorded", body = EngagementResponse),
        (status = 400, description = "Missing or unknown engagement type", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Video not found or deleted", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Engagements"
)]
#[instrument(skip(state, auth_user), fields(user = %auth_user.username()))]
pub async fn record_engagement(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedPath(video_id): ValidatedPath<i64>,
    ValidatedQuery(query): ValidatedQuery<EngagementQuery>,
) -> Result<Json<EngagementResponse>, AppError> {
    let response = EngagementService::record_engagement(
        &state.db,
        video_id,
        auth_user.username(),
        query.engagement_type,
    )
    .await?;
    Ok(Json(response))
}

/// Impression and view totals for a video
#[utoipa::path(
    get,
    path = "/api/engagements/{video_id}",
    params(
        ("video_id" = i64, Path, description = "Video ID")
    ),
    responses(
        (status = 200, description = "Engagement totals", body = EngagementStatsResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Video not found or never engaged with", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Engagements"
)]
#[instrument(skip(state))]
pub async fn get_engagement_stats(
    State(state): State<AppState>,
    ValidatedPath(video_id): ValidatedPath<i64>,
) -> Result<Json<EngagementStatsResponse>, AppError> {
    let response = EngagementService::get_engagement_stats(&state.db, video_id).await?;
    Ok(Json(response))
}
