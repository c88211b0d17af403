#![cfg(feature = "db-tests")]

mod common;

use axum::http::StatusCode;
use common::{access_token, app, bare_request, body_json, json_request};
use serde_json::{Value, json};
use sqlx::PgPool;
use tower::ServiceExt;

fn video_body(title: &str) -> Value {
    json!({
        "title": title,
        "director": "Michael Mann",
        "cast": ["Al Pacino", "Robert De Niro"],
        "metadata": {
            "synopsis": "A detective hunts a crew of thieves.",
            "yearOfRelease": 1995,
            "genre": "Crime",
            "runningTime": 170
        },
        "fileUrl": "https://cdn.example.com/heat.mp4",
        "fileSize": 734003200,
        "format": "mp4",
        "resolution": 1080,
        "duration": 10200
    })
}

async fn publish(pool: &PgPool, token: &str, body: &Value) -> (StatusCode, Value) {
    let response = app(pool.clone())
        .oneshot(json_request("POST", "/api/videos", Some(token), body))
        .await
        .unwrap();
    let status = response.status();
    (status, body_json(response).await)
}

#[sqlx::test(migrations = "./migrations")]
async fn test_publish_and_load(pool: PgPool) {
    let token = access_token("alice");

    let (status, body) = publish(&pool, &token, &video_body("Heat")).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["videoId"].as_i64().unwrap();

    let response = app(pool)
        .oneshot(common::get(&format!("/api/videos/{}/load", id), Some(&token)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["title"], "Heat");
    assert_eq!(body["cast"][1], "Robert De Niro");
    assert_eq!(body["genre"], "Crime");
    assert_eq!(body["fileUrl"], "https://cdn.example.com/heat.mp4");
    assert_eq!(body["success"], true);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_publish_duplicate_title_is_conflict(pool: PgPool) {
    let token = access_token("alice");

    let (status, _) = publish(&pool, &token, &video_body("Heat")).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = publish(&pool, &token, &video_body("HEAT")).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["statusCode"], 409);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_publish_invalid_metadata_is_bad_request(pool: PgPool) {
    let token = access_token("alice");
    let mut body = video_body("Heat");
    body["metadata"]["yearOfRelease"] = json!(1800);

    let (status, body) = publish(&pool, &token, &body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("metadata.year_of_release")
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_metadata(pool: PgPool) {
    let token = access_token("alice");
    let (_, body) = publish(&pool, &token, &video_body("Heat")).await;
    let id = body["videoId"].as_i64().unwrap();

    let response = app(pool.clone())
        .oneshot(json_request(
            "PUT",
            &format!("/api/videos/{}/metadata", id),
            Some(&token),
            &json!({
                "synopsis": "Director's cut.",
                "yearOfRelease": 1995,
                "genre": "Thriller",
                "runningTime": 171
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app(pool.clone())
        .oneshot(common::get(&format!("/api/videos/{}/load", id), Some(&token)))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["genre"], "Thriller");
    assert_eq!(body["runningTime"], 171);

    let response = app(pool)
        .oneshot(json_request(
            "PUT",
            "/api/videos/999999/metadata",
            Some(&token),
            &json!({
                "synopsis": "Nothing here.",
                "yearOfRelease": 2000,
                "genre": "Drama",
                "runningTime": 90
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_soft_delete_hides_video(pool: PgPool) {
    let token = access_token("alice");
    let (_, body) = publish(&pool, &token, &video_body("Heat")).await;
    let id = body["videoId"].as_i64().unwrap();

    let response = app(pool.clone())
        .oneshot(bare_request("DELETE", &format!("/api/videos/{}", id), Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app(pool.clone())
        .oneshot(bare_request("DELETE", &format!("/api/videos/{}", id), Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    for uri in [
        format!("/api/videos/{}/load", id),
        format!("/api/videos/{}/play", id),
        "/api/videos".to_string(),
        "/api/videos/search?searchPhrase=heat".to_string(),
    ] {
        let response = app(pool.clone())
            .oneshot(common::get(&uri, Some(&token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", uri);
    }

    // The row still exists
    let active: bool = sqlx::query_scalar("SELECT is_active FROM videos WHERE id = $1")
        .bind(id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert!(!active);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_play_without_file_url_is_server_error(pool: PgPool) {
    let token = access_token("alice");
    let mut body = video_body("Heat");
    body.as_object_mut().unwrap().remove("fileUrl");
    let (_, body) = publish(&pool, &token, &body).await;
    let id = body["videoId"].as_i64().unwrap();

    let response = app(pool)
        .oneshot(common::get(&format!("/api/videos/{}/play", id), Some(&token)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["message"], "Video file URL is missing");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_videos_paginates(pool: PgPool) {
    let token = access_token("alice");
    for title in ["Heat", "Collateral", "Thief"] {
        publish(&pool, &token, &video_body(title)).await;
    }

    let response = app(pool.clone())
        .oneshot(common::get("/api/videos?page=0&size=2", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
    assert_eq!(body["data"][0]["title"], "Heat");
    assert_eq!(body["data"][0]["releaseYear"], 1995);
    assert_eq!(body["meta"]["totalElements"], 3);
    assert_eq!(body["meta"]["totalPages"], 2);
    assert_eq!(body["meta"]["hasMore"], true);

    let response = app(pool.clone())
        .oneshot(common::get("/api/videos?page=1&size=2", Some(&token)))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["meta"]["hasMore"], false);

    let response = app(pool)
        .oneshot(common::get("/api/videos?page=5&size=2", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_search_matches_fields_case_insensitively(pool: PgPool) {
    let token = access_token("alice");
    publish(&pool, &token, &video_body("Heat")).await;
    let mut other = video_body("Amelie");
    other["director"] = json!("Jean-Pierre Jeunet");
    other["cast"] = json!(["Audrey Tautou"]);
    other["metadata"]["genre"] = json!("Romance");
    publish(&pool, &token, &other).await;

    for (phrase, expected) in [
        ("hEaT", "Heat"),
        ("jeunet", "Amelie"),
        ("ROMANCE", "Amelie"),
        ("de%20niro", "Heat"),
    ] {
        let response = app(pool.clone())
            .oneshot(common::get(
                &format!("/api/videos/search?searchPhrase={}", phrase),
                Some(&token),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{}", phrase);
        let body = body_json(response).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 1, "{}", phrase);
        assert_eq!(body["data"][0]["title"], expected);
    }

    // Wildcards are matched literally
    let response = app(pool)
        .oneshot(common::get("/api/videos/search?searchPhrase=%25", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
