use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use reelbase_core::{AppError, ErrorResponse, PaginationParams};
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validator::{ValidatedJson, ValidatedPath, ValidatedQuery};

use super::model::{
    LoadVideoResponse, MetadataRequest, MetadataResponse, PaginatedSearchResponse,
    PaginatedVideosResponse, PlayVideoResponse, PublishVideoRequest, PublishVideoResponse,
    SearchQuery, SoftDeleteResponse,
};
use super::service::VideoService;

/// Publish a video together with its metadata
#[utoipa::path(
    post,
    path = "/api/videos",
    request_body = PublishVideoRequest,
    responses(
        (status = 201, description = "Video published", body = PublishVideoResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 409, description = "A video with this title already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Videos"
)]
#[instrument(skip(state, auth_user, dto), fields(user = %auth_user.username()))]
pub async fn publish_video(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<PublishVideoRequest>,
) -> Result<(StatusCode, Json<PublishVideoResponse>), AppError> {
    let response = VideoService::publish_video(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Add or replace a video's metadata
#[utoipa::path(
    put,
    path = "/api/videos/{id}/metadata",
    params(
        ("id" = i64, Path, description = "Video ID")
    ),
    request_body = MetadataRequest,
    responses(
        (status = 200, description = "Metadata saved", body = MetadataResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Video not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Videos"
)]
#[instrument(skip(state, dto))]
pub async fn update_metadata(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i64>,
    ValidatedJson(dto): ValidatedJson<MetadataRequest>,
) -> Result<Json<MetadataResponse>, AppError> {
    let response = VideoService::update_metadata(&state.db, id, dto).await?;
    Ok(Json(response))
}

/// Soft-delete a video
#[utoipa::path(
    delete,
    path = "/api/videos/{id}",
    params(
        ("id" = i64, Path, description = "Video ID")
    ),
    responses(
        (status = 200, description = "Video deleted", body = SoftDeleteResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Video not found", body = ErrorResponse),
        (status = 409, description = "Video already deleted", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Videos"
)]
#[instrument(skip(state, auth_user), fields(user = %auth_user.username()))]
pub async fn delete_video(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedPath(id): ValidatedPath<i64>,
) -> Result<Json<SoftDeleteResponse>, AppError> {
    let response = VideoService::soft_delete_video(&state.db, id).await?;
    Ok(Json(response))
}

/// Load a video's full content descriptor
#[utoipa::path(
    get,
    path = "/api/videos/{id}/load",
    params(
        ("id" = i64, Path, description = "Video ID")
    ),
    responses(
        (status = 200, description = "Video loaded", body = LoadVideoResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Video not found or deleted", body = ErrorResponse),
        (status = 500, description = "Video file URL is missing", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Videos"
)]
#[instrument(skip(state))]
pub async fn load_video(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i64>,
) -> Result<Json<LoadVideoResponse>, AppError> {
    let response = VideoService::load_video(&state.db, id).await?;
    Ok(Json(response))
}

/// Get the playback descriptor for a video
#[utoipa::path(
    get,
    path = "/api/videos/{id}/play",
    params(
        ("id" = i64, Path, description = "Video ID")
    ),
    responses(
        (status = 200, description = "Video ready to play", body = PlayVideoResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Video not found or deleted", body = ErrorResponse),
        (status = 500, description = "Video file URL is missing", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Videos"
)]
#[instrument(skip(state))]
pub async fn play_video(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i64>,
) -> Result<Json<PlayVideoResponse>, AppError> {
    let response = VideoService::play_video(&state.db, id).await?;
    Ok(Json(response))
}

/// List active videos
#[utoipa::path(
    get,
    path = "/api/videos",
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of videos", body = PaginatedVideosResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "No videos on this page", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Videos"
)]
#[instrument(skip(state))]
pub async fn list_videos(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<PaginationParams>,
) -> Result<Json<PaginatedVideosResponse>, AppError> {
    let response = VideoService::list_videos(&state.db, params).await?;
    Ok(Json(response))
}

/// Search active videos by title, director, genre or cast
#[utoipa::path(
    get,
    path = "/api/videos/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching videos", body = PaginatedSearchResponse),
        (status = 400, description = "Blank search phrase", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "No matches", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Videos"
)]
#[instrument(skip(state))]
pub async fn search_videos(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<SearchQuery>,
) -> Result<Json<PaginatedSearchResponse>, AppError> {
    let response = VideoService::search_videos(&state.db, query).await?;
    Ok(Json(response))
}
