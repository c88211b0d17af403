use std::time::Instant;

use fake::Fake;
use fake::faker::lorem::en::{Sentence, Words};
use fake::faker::name::en::Name;
use rayon::prelude::*;
use sqlx::{PgPool, Postgres, Transaction};

use super::models::{MetadataSeed, VideoSeed};

const GENRES: &[&str] = &[
    "Action",
    "Comedy",
    "Documentary",
    "Drama",
    "Horror",
    "Romance",
    "Science Fiction",
    "Thriller",
];
const FORMATS: &[&str] = &["mp4", "mkv", "webm"];
const RESOLUTIONS: &[i32] = &[480, 720, 1080, 2160];
const BATCH_SIZE: usize = 200;

fn pick<T: Copy>(items: &[T]) -> T {
    items[(0..items.len()).fake::<usize>()]
}

fn title_case(words: &[String]) -> String {
    words
        .iter()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Generates video data in parallel using Rayon
pub fn generate_videos(count: usize) -> Vec<VideoSeed> {
    (0..count)
        .into_par_iter()
        .map(|i| {
            let words: Vec<String> = Words(2..5).fake();
            let title = format!("{} {}", title_case(&words), i + 1);
            let slug = title.to_lowercase().replace(' ', "-");
            let format = pick(FORMATS);
            let running_time: i32 = (70..180).fake();

            VideoSeed {
                file_url: format!("https://cdn.reelbase.dev/videos/{}.{}", slug, format),
                title,
                director: Name().fake(),
                cast: (0..(2..6).fake::<usize>()).map(|_| Name().fake()).collect(),
                file_size: (50_000_000i64..4_000_000_000).fake(),
                format: format.to_string(),
                resolution: pick(RESOLUTIONS),
                duration: running_time * 60,
                metadata: MetadataSeed {
                    synopsis: Sentence(8..20).fake(),
                    year_of_release: (1920..2026).fake(),
                    genre: pick(GENRES).to_string(),
                    running_time,
                },
            }
        })
        .collect()
}

/// Seeds videos with metadata, returning the number actually inserted.
pub async fn seed_videos(db: &PgPool, count: usize) -> anyhow::Result<usize> {
    let start_time = Instant::now();
    println!("🎬 Seeding {} videos...", count);

    let videos = generate_videos(count);
    let mut inserted = 0;

    for chunk in videos.chunks(BATCH_SIZE) {
        let mut tx = db.begin().await?;
        for video in chunk {
            if insert_video(&mut tx, video).await? {
                inserted += 1;
            }
        }
        tx.commit().await?;
    }

    println!(
        "   ✓ Inserted {} videos in {:?} ({} skipped as duplicates)",
        inserted,
        start_time.elapsed(),
        count - inserted
    );

    Ok(inserted)
}

async fn insert_video(
    tx: &mut Transaction<'_, Postgres>,
    video: &VideoSeed,
) -> anyhow::Result<bool> {
    let video_id: Option<i64> = sqlx::query_scalar(
        "INSERT INTO videos (title, director, cast_members, file_url, file_size, format, resolution, duration)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
         ON CONFLICT (LOWER(title)) DO NOTHING
         RETURNING id",
    )
    .bind(&video.title)
    .bind(&video.director)
    .bind(&video.cast)
    .bind(&video.file_url)
    .bind(video.file_size)
    .bind(&video.format)
    .bind(video.resolution)
    .bind(video.duration)
    .fetch_optional(&mut **tx)
    .await?;

    let Some(video_id) = video_id else {
        return Ok(false);
    };

    sqlx::query(
        "INSERT INTO video_metadata (video_id, synopsis, year_of_release, genre, running_time)
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(video_id)
    .bind(&video.metadata.synopsis)
    .bind(video.metadata.year_of_release)
    .bind(&video.metadata.genre)
    .bind(video.metadata.running_time)
    .execute(&mut **tx)
    .await?;

    Ok(true)
}

/// Removes every video. Metadata and engagements go with them.
pub async fn clear_videos(db: &PgPool) -> anyhow::Result<u64> {
    let start_time = Instant::now();
    println!("🗑️  Clearing videos...");

    let deleted = sqlx::query("DELETE FROM videos")
        .execute(db)
        .await?
        .rows_affected();

    println!("   ✓ Deleted {} videos in {:?}", deleted, start_time.elapsed());

    Ok(deleted)
}
