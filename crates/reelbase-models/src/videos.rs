//! Video catalog models and DTOs.
//!
//! A video row holds the descriptive fields (title, director, cast) and the
//! optional content descriptor (file location, size, format, resolution,
//! duration). Editorial metadata lives in a separate 1:1 row. Deleting a video
//! only clears `is_active`; inactive videos disappear from every read path.

use reelbase_core::pagination::deserialize_optional_i64;
use reelbase_core::{PaginationMeta, PaginationParams};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

/// Earliest accepted release year.
pub const FIRST_FILM_YEAR: i32 = 1888;

fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}

/// Video joined with its (optional) metadata row.
#[derive(Debug, Clone, FromRow)]
pub struct VideoDetails {
    pub id: i64,
    pub title: String,
    pub director: String,
    pub cast_members: Vec<String>,
    pub file_url: Option<String>,
    pub file_size: Option<i64>,
    pub format: Option<String>,
    pub resolution: Option<i32>,
    pub duration: Option<i32>,
    pub synopsis: Option<String>,
    pub year_of_release: Option<i32>,
    pub genre: Option<String>,
    pub running_time: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MetadataRequest {
    #[validate(custom(function = "non_blank"), length(max = 5000))]
    #[schema(example = "A hacker learns the world is a simulation.")]
    pub synopsis: String,
    #[validate(range(min = 1888, max = 9999))]
    #[schema(example = 1999)]
    pub year_of_release: i32,
    #[validate(custom(function = "non_blank"), length(max = 100))]
    #[schema(example = "Science Fiction")]
    pub genre: String,
    /// Minutes
    #[validate(range(min = 1))]
    #[schema(example = 136)]
    pub running_time: i32,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublishVideoRequest {
    #[validate(custom(function = "non_blank"), length(max = 255))]
    #[schema(example = "The Matrix")]
    pub title: String,
    #[validate(custom(function = "non_blank"), length(max = 255))]
    #[schema(example = "Lana Wachowski")]
    pub director: String,
    #[serde(default)]
    pub cast: Vec<String>,
    #[validate(nested)]
    pub metadata: MetadataRequest,
    #[validate(url)]
    pub file_url: Option<String>,
    /// Bytes
    #[validate(range(min = 0))]
    pub file_size: Option<i64>,
    pub format: Option<String>,
    #[validate(range(min = 1))]
    pub resolution: Option<i32>,
    /// Seconds
    #[validate(range(min = 1))]
    pub duration: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublishVideoResponse {
    pub video_id: i64,
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MetadataResponse {
    pub video_id: i64,
    pub message: String,
    pub success: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SoftDeleteResponse {
    pub video_id: i64,
    pub message: String,
    pub success: bool,
}

/// Full content descriptor returned by the load endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoadVideoResponse {
    pub video_id: i64,
    pub title: String,
    pub director: String,
    pub cast: Vec<String>,
    pub file_url: String,
    pub file_size: Option<i64>,
    pub format: Option<String>,
    pub resolution: Option<i32>,
    pub duration: Option<i32>,
    pub synopsis: Option<String>,
    pub year_of_release: Option<i32>,
    pub genre: Option<String>,
    pub running_time: Option<i32>,
    pub message: String,
    pub success: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayVideoResponse {
    pub video_id: i64,
    pub title: String,
    pub file_url: String,
    pub format: Option<String>,
    pub resolution: Option<i32>,
    pub duration: Option<i32>,
    pub message: String,
    pub success: bool,
}

/// One row of the catalog listing.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VideoSummary {
    pub video_id: i64,
    pub title: String,
    pub director: String,
    pub genre: Option<String>,
    pub release_year: Option<i32>,
    pub running_time: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchVideoResult {
    pub video_id: i64,
    pub title: String,
    pub director: String,
    pub genre: Option<String>,
    #[serde(rename = "cast")]
    pub cast_members: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedVideosResponse {
    pub data: Vec<VideoSummary>,
    pub meta: PaginationMeta,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedSearchResponse {
    pub data: Vec<SearchVideoResult>,
    pub meta: PaginationMeta,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Matched case-insensitively against title, director, genre and cast
    pub search_phrase: Option<String>,
    /// Zero-based page number (default: 0)
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub page: Option<i64>,
    /// Items per page (1-100, default: 10)
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub size: Option<i64>,
}

impl SearchQuery {
    pub fn pagination(&self) -> PaginationParams {
        PaginationParams {
            page: self.page,
            size: self.size,
        }
    }
}
