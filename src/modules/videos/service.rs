use anyhow::anyhow;
use reelbase_core::{AppError, PaginationMeta, PaginationParams};
use reelbase_observability::track_video_published;
use sqlx::PgPool;
use tracing::instrument;

use super::model::{
    LoadVideoResponse, MetadataRequest, MetadataResponse, PaginatedSearchResponse,
    PaginatedVideosResponse, PlayVideoResponse, PublishVideoRequest, PublishVideoResponse,
    SearchQuery, SearchVideoResult, SoftDeleteResponse, VideoDetails, VideoSummary,
};

const VIDEO_DETAILS_QUERY: &str = r#"
    SELECT v.id, v.title, v.director, v.cast_members, v.file_url, v.file_size,
           v.format, v.resolution, v.duration,
           m.synopsis, m.year_of_release, m.genre, m.running_time
    FROM videos v
    LEFT JOIN video_metadata m ON m.video_id = v.id
    WHERE v.id = $1 AND v.is_active = true
"#;

// $1 is an ILIKE pattern
const SEARCH_CONDITION: &str = r#"
    v.is_active = true AND (
        v.title ILIKE $1
        OR v.director ILIKE $1
        OR m.genre ILIKE $1
        OR EXISTS (SELECT 1 FROM unnest(v.cast_members) AS c(name) WHERE c.name ILIKE $1)
    )
"#;

/// Escapes `LIKE` wildcards so the phrase matches literally.
pub fn escape_like(phrase: &str) -> String {
    let mut escaped = String::with_capacity(phrase.len());
    for ch in phrase.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

fn video_not_found(id: i64) -> AppError {
    AppError::not_found(anyhow!("Video with id {} not found", id))
}

/// The file location a load or play response needs.
fn require_file_url(details: &VideoDetails) -> Result<String, AppError> {
    match details.file_url.as_deref().map(str::trim) {
        Some(url) if !url.is_empty() => Ok(url.to_string()),
        _ => {
            tracing::error!(video_id = details.id, "Video has no file URL");
            Err(AppError::internal_error("Video file URL is missing"))
        }
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation())
}

pub struct VideoService;

impl VideoService {
    #[instrument(skip(db, dto), fields(title = %dto.title))]
    pub async fn publish_video(
        db: &PgPool,
        dto: PublishVideoRequest,
    ) -> Result<PublishVideoResponse, AppError> {
        let title = dto.title.trim().to_string();
        let duplicate = || AppError::conflict(anyhow!("Video with title '{}' already exists", title));

        let mut tx = db.begin().await?;

        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM videos WHERE LOWER(title) = LOWER($1))")
                .bind(&title)
                .fetch_one(&mut *tx)
                .await?;
        if exists {
            return Err(duplicate());
        }

        let video_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO videos (title, director, cast_members, file_url, file_size, format, resolution, duration)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(&title)
        .bind(dto.director.trim())
        .bind(&dto.cast)
        .bind(&dto.file_url)
        .bind(dto.file_size)
        .bind(&dto.format)
        .bind(dto.resolution)
        .bind(dto.duration)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                duplicate()
            } else {
                AppError::database(e)
            }
        })?;

        let metadata = &dto.metadata;
        sqlx::query(
            r#"
            INSERT INTO video_metadata (video_id, synopsis, year_of_release, genre, running_time)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(video_id)
        .bind(&metadata.synopsis)
        .bind(metadata.year_of_release)
        .bind(&metadata.genre)
        .bind(metadata.running_time)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        track_video_published();
        tracing::info!(video_id, "Video published");

        Ok(PublishVideoResponse {
            video_id,
            title,
            message: "Video published successfully".to_string(),
        })
    }

    /// Adds metadata to a video or replaces what it has.
    #[instrument(skip(db, dto))]
    pub async fn update_metadata(
        db: &PgPool,
        video_id: i64,
        dto: MetadataRequest,
    ) -> Result<MetadataResponse, AppError> {
        let mut tx = db.begin().await?;

        let updated = sqlx::query("UPDATE videos SET updated_at = NOW() WHERE id = $1")
            .bind(video_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        if updated == 0 {
            return Err(video_not_found(video_id));
        }

        sqlx::query(
            r#"
            INSERT INTO video_metadata (video_id, synopsis, year_of_release, genre, running_time)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (video_id) DO UPDATE
            SET synopsis = EXCLUDED.synopsis,
                year_of_release = EXCLUDED.year_of_release,
                genre = EXCLUDED.genre,
                running_time = EXCLUDED.running_time,
                updated_at = NOW()
            "#,
        )
        .bind(video_id)
        .bind(&dto.synopsis)
        .bind(dto.year_of_release)
        .bind(&dto.genre)
        .bind(dto.running_time)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(MetadataResponse {
            video_id,
            message: "Metadata updated successfully".to_string(),
            success: true,
        })
    }

    #[instrument(skip(db))]
    pub async fn soft_delete_video(
        db: &PgPool,
        video_id: i64,
    ) -> Result<SoftDeleteResponse, AppError> {
        let deleted: Option<i64> = sqlx::query_scalar(
            "UPDATE videos SET is_active = false, updated_at = NOW()
             WHERE id = $1 AND is_active = true
             RETURNING id",
        )
        .bind(video_id)
        .fetch_optional(db)
        .await?;

        if deleted.is_none() {
            let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM videos WHERE id = $1)")
                .bind(video_id)
                .fetch_one(db)
                .await?;

            return Err(if exists {
                AppError::conflict(anyhow!("Video with id {} is already deleted", video_id))
            } else {
                video_not_found(video_id)
            });
        }

        tracing::info!(video_id, "Video soft-deleted");

        Ok(SoftDeleteResponse {
            video_id,
            message: "Video deleted successfully".to_string(),
            success: true,
        })
    }

    async fn find_active_details(db: &PgPool, video_id: i64) -> Result<VideoDetails, AppError> {
        sqlx::query_as::<_, VideoDetails>(VIDEO_DETAILS_QUERY)
            .bind(video_id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| video_not_found(video_id))
    }

    #[instrument(skip(db))]
    pub async fn load_video(db: &PgPool, video_id: i64) -> Result<LoadVideoResponse, AppError> {
        let details = Self::find_active_details(db, video_id).await?;
        let file_url = require_file_url(&details)?;

        Ok(LoadVideoResponse {
            video_id: details.id,
            title: details.title,
            director: details.director,
            cast: details.cast_members,
            file_url,
            file_size: details.file_size,
            format: details.format,
            resolution: details.resolution,
            duration: details.duration,
            synopsis: details.synopsis,
            year_of_release: details.year_of_release,
            genre: details.genre,
            running_time: details.running_time,
            message: "Video loaded successfully".to_string(),
            success: true,
        })
    }

    #[instrument(skip(db))]
    pub async fn play_video(db: &PgPool, video_id: i64) -> Result<PlayVideoResponse, AppError> {
        let details = Self::find_active_details(db, video_id).await?;
        let file_url = require_file_url(&details)?;

        Ok(PlayVideoResponse {
            video_id: details.id,
            title: details.title,
            file_url,
            format: details.format,
            resolution: details.resolution,
            duration: details.duration,
            message: "Video is ready to play".to_string(),
            success: true,
        })
    }

    #[instrument(skip(db))]
    pub async fn list_videos(
        db: &PgPool,
        params: PaginationParams,
    ) -> Result<PaginatedVideosResponse, AppError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM videos WHERE is_active = true")
            .fetch_one(db)
            .await?;

        let videos = sqlx::query_as::<_, VideoSummary>(
            r#"
            SELECT v.id AS video_id, v.title, v.director, m.genre,
                   m.year_of_release AS release_year, m.running_time
            FROM videos v
            LEFT JOIN video_metadata m ON m.video_id = v.id
            WHERE v.is_active = true
            ORDER BY v.id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(params.size())
        .bind(params.offset())
        .fetch_all(db)
        .await?;

        if videos.is_empty() {
            return Err(AppError::not_found(anyhow!("No videos found")));
        }

        Ok(PaginatedVideosResponse {
            data: videos,
            meta: PaginationMeta::new(total, &params),
        })
    }

    #[instrument(skip(db))]
    pub async fn search_videos(
        db: &PgPool,
        query: SearchQuery,
    ) -> Result<PaginatedSearchResponse, AppError> {
        let phrase = query
            .search_phrase
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .ok_or_else(|| AppError::bad_request(anyhow!("Search phrase must not be blank")))?;
        let pattern = format!("%{}%", escape_like(phrase));
        let params = query.pagination();

        let total: i64 = sqlx::query_scalar(&format!(
            "SELECT COUNT(*) FROM videos v LEFT JOIN video_metadata m ON m.video_id = v.id WHERE {}",
            SEARCH_CONDITION
        ))
        .bind(&pattern)
        .fetch_one(db)
        .await?;

        let results = sqlx::query_as::<_, SearchVideoResult>(&format!(
            r#"
            SELECT v.id AS video_id, v.title, v.director, m.genre, v.cast_members
            FROM videos v
            LEFT JOIN video_metadata m ON m.video_id = v.id
            WHERE {}
            ORDER BY v.id
            LIMIT $2 OFFSET $3
            "#,
            SEARCH_CONDITION
        ))
        .bind(&pattern)
        .bind(params.size())
        .bind(params.offset())
        .fetch_all(db)
        .await?;

        if results.is_empty() {
            return Err(AppError::not_found(anyhow!(
                "No videos found matching '{}'",
                phrase
            )));
        }

        Ok(PaginatedSearchResponse {
            data: results,
            meta: PaginationMeta::new(total, &params),
        })
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;

    fn details(file_url: Option<&str>) -> VideoDetails {
        VideoDetails {
            id: 1,
            title: "Heat".to_string(),
            director: "Michael Mann".to_string(),
            cast_members: vec![],
            file_url: file_url.map(str::to_string),
            file_size: None,
            format: None,
            resolution: None,
            duration: None,
            synopsis: None,
            year_of_release: None,
            genre: None,
            running_time: None,
        }
    }

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("matrix"), "matrix");
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("c:\\x"), "c:\\\\x");
    }

    #[test]
    fn test_require_file_url() {
        assert_eq!(
            require_file_url(&details(Some("https://cdn/heat.mp4"))).unwrap(),
            "https://cdn/heat.mp4"
        );

        for missing in [None, Some(""), Some("  ")] {
            let err = require_file_url(&details(missing)).unwrap_err();
            assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(err.body().message, "Video file URL is missing");
        }
    }
}
