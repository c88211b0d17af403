//! Engagement counters.
//!
//! Each (video, user) pair owns one row with an impression counter and a view
//! counter. Totals for a video are the sum over its rows.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EngagementType {
    /// The video was shown to the user
    Impression,
    /// The user started playback
    View,
}

impl EngagementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EngagementType::Impression => "IMPRESSION",
            EngagementType::View => "VIEW",
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EngagementQuery {
    #[serde(rename = "type")]
    pub engagement_type: EngagementType,
}

#[derive(Debug, Clone, FromRow)]
pub struct VideoEngagement {
    pub video_id: i64,
    pub username: String,
    pub impressions: i64,
    pub views: i64,
}

#[derive(Debug, Clone, FromRow)]
pub struct EngagementTotals {
    pub title: String,
    /// Number of per-user rows summed
    pub records: i64,
    pub impressions: i64,
    pub views: i64,
}

/// Counters for the calling user after an engagement was recorded.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EngagementResponse {
    pub video_id: i64,
    pub username: String,
    pub title: String,
    #[serde(rename = "type")]
    pub engagement_type: EngagementType,
    pub impressions: i64,
    pub views: i64,
    pub message: String,
    pub success: bool,
}

/// Totals across all users.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EngagementStatsResponse {
    pub video_id: i64,
    pub title: String,
    pub impressions: i64,
    pub views: i64,
    pub message: String,
    pub success: bool,
}
