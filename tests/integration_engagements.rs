#![cfg(feature = "db-tests")]

mod common;

use axum::http::StatusCode;
use common::{access_token, app, bare_request, body_json};
use sqlx::PgPool;
use tower::ServiceExt;

async fn insert_video(pool: &PgPool, title: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO videos (title, director, cast_members) VALUES ($1, 'Michael Mann', '{}') RETURNING id",
    )
    .bind(title)
    .fetch_one(pool)
    .await
    .unwrap()
}

async fn engage(pool: &PgPool, token: &str, video_id: i64, kind: &str) -> (StatusCode, serde_json::Value) {
    let response = app(pool.clone())
        .oneshot(bare_request(
            "POST",
            &format!("/api/engagements/{}?type={}", video_id, kind),
            Some(token),
        ))
        .await
        .unwrap();
    let status = response.status();
    (status, body_json(response).await)
}

#[sqlx::test(migrations = "./migrations")]
async fn test_counters_accumulate_per_user(pool: PgPool) {
    let video_id = insert_video(&pool, "Heat").await;
    let alice = access_token("alice");

    engage(&pool, &alice, video_id, "IMPRESSION").await;
    engage(&pool, &alice, video_id, "IMPRESSION").await;
    let (status, body) = engage(&pool, &alice, video_id, "VIEW").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "alice");
    assert_eq!(body["type"], "VIEW");
    assert_eq!(body["impressions"], 2);
    assert_eq!(body["views"], 1);

    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM video_engagements WHERE video_id = $1")
        .bind(video_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(rows, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_stats_sum_across_users(pool: PgPool) {
    let video_id = insert_video(&pool, "Heat").await;
    let alice = access_token("alice");
    let bob = access_token("bob");

    engage(&pool, &alice, video_id, "IMPRESSION").await;
    engage(&pool, &alice, video_id, "VIEW").await;
    engage(&pool, &bob, video_id, "IMPRESSION").await;

    let response = app(pool)
        .oneshot(common::get(&format!("/api/engagements/{}", video_id), Some(&alice)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["title"], "Heat");
    assert_eq!(body["impressions"], 2);
    assert_eq!(body["views"], 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_concurrent_engagements_are_not_lost(pool: PgPool) {
    let video_id = insert_video(&pool, "Heat").await;
    let token = access_token("alice");

    let mut handles = Vec::new();
    for _ in 0..10 {
        let pool = pool.clone();
        let token = token.clone();
        handles.push(tokio::spawn(async move {
            engage(&pool, &token, video_id, "VIEW").await.0
        }));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap(), StatusCode::OK);
    }

    let views: i64 = sqlx::query_scalar(
        "SELECT views FROM video_engagements WHERE video_id = $1 AND username = 'alice'",
    )
    .bind(video_id)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(views, 10);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_missing_or_inactive_video_is_not_found(pool: PgPool) {
    let token = access_token("alice");
    let (status, _) = engage(&pool, &token, 424242, "VIEW").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let video_id = insert_video(&pool, "Heat").await;
    sqlx::query("UPDATE videos SET is_active = false WHERE id = $1")
        .bind(video_id)
        .execute(&pool)
        .await
        .unwrap();
    let (status, _) = engage(&pool, &token, video_id, "IMPRESSION").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_stats_without_engagement_is_not_found(pool: PgPool) {
    let video_id = insert_video(&pool, "Heat").await;

    let response = app(pool)
        .oneshot(common::get(
            &format!("/api/engagements/{}", video_id),
            Some(&access_token("alice")),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_unknown_engagement_type_is_bad_request(pool: PgPool) {
    let video_id = insert_video(&pool, "Heat").await;

    let token = access_token("alice");

    for query in ["type=CLICK", "type=view", ""] {
        let response = app(pool.clone())
            .oneshot(bare_request(
                "POST",
                &format!("/api/engagements/{}?{}", video_id, query),
                Some(&token),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", query);
        let body = body_json(response).await;
        assert_eq!(body["statusCode"], 400, "{}", query);
        assert!(body["message"].is_string(), "{}", query);
    }
}
