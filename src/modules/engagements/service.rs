use anyhow::anyhow;
use reelbase_core::AppError;
use reelbase_observability::track_engagement_recorded;
use sqlx::PgPool;
use tracing::instrument;

use super::model::{
    EngagementResponse, EngagementStatsResponse, EngagementTotals, EngagementType,
    VideoEngagement,
};

/// (impressions, views) added by one engagement event.
pub fn increments(engagement_type: EngagementType) -> (i64, i64) {
    match engagement_type {
        EngagementType::Impression => (1, 0),
        EngagementType::View => (0, 1),
    }
}

pub struct EngagementService;

impl EngagementService {
    /// Bumps the caller's counter for an active video.
    #[instrument(skip(db))]
    pub async fn record_engagement(
        db: &PgPool,
        video_id: i64,
        username: &str,
        engagement_type: EngagementType,
    ) -> Result<EngagementResponse, AppError> {
        let title: String =
            sqlx::query_scalar("SELECT title FROM videos WHERE id = $1 AND is_active = true")
                .bind(video_id)
                .fetch_optional(db)
                .await?
                .ok_or_else(|| AppError::not_found(anyhow!("Video with id {} not found", video_id)))?;

        let (impressions, views) = increments(engagement_type);

        // Atomic per (video, user)
        let engagement = sqlx::query_as::<_, VideoEngagement>(
            r#"
            INSERT INTO video_engagements (video_id, username, impressions, views)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (video_id, username) DO UPDATE
            SET impressions = video_engagements.impressions + EXCLUDED.impressions,
                views = video_engagements.views + EXCLUDED.views,
                updated_at = NOW()
            RETURNING video_id, username, impressions, views
            "#,
        )
        .bind(video_id)
        .bind(username)
        .bind(impressions)
        .bind(views)
        .fetch_one(db)
        .await?;

        track_engagement_recorded(engagement_type.as_str());

        Ok(EngagementResponse {
            video_id: engagement.video_id,
            username: engagement.username,
            title,
            engagement_type,
            impressions: engagement.impressions,
            views: engagement.views,
            message: format!("{} recorded", engagement_type.as_str()),
            success: true,
        })
    }

    /// Totals across every user.
    #[instrument(skip(db))]
    pub async fn get_engagement_stats(
        db: &PgPool,
        video_id: i64,
    ) -> Result<EngagementStatsResponse, AppError> {
        let totals = sqlx::query_as::<_, EngagementTotals>(
            r#"
            SELECT v.title,
                   COUNT(e.id) AS records,
                   COALESCE(SUM(e.impressions), 0)::BIGINT AS impressions,
                   COALESCE(SUM(e.views), 0)::BIGINT AS views
            FROM videos v
            LEFT JOIN video_engagements e ON e.video_id = v.id
            WHERE v.id = $1 AND v.is_active = true
            GROUP BY v.id, v.title
            "#,
        )
        .bind(video_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!("Video with id {} not found", video_id)))?;

        if totals.records == 0 {
            return Err(AppError::not_found(anyhow!(
                "No engagement recorded for video {}",
                video_id
            )));
        }

        Ok(EngagementStatsResponse {
            video_id,
            title: totals.title,
            impressions: totals.impressions,
            views: totals.views,
            message: "Engagement statistics retrieved".to_string(),
            success: true,
        })
    }
}
