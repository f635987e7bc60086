/// API integration tests
/// Tests complete HTTP request/response cycles with a real database
mod common;

use aria_server::{api, state::AppState};
use axum::{
    body::Body,
    http::{Request, StatusCode},
    routing::get,
    Router,
};
use common::{create_test_state, insert_song_at};
use tower::util::ServiceExt;

/// Helper to create a test app router
fn create_test_app(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(api::health::health))
        .route("/songs", get(api::songs::list_songs))
        .route("/songs/:id", get(api::songs::get_song));

    Router::new().nest("/api", api_routes).with_state(state)
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&body_bytes).unwrap_or(serde_json::Value::Null);

    (status, value)
}

#[tokio::test]
async fn health_reports_ok() {
    let (state, _temp_dir) = create_test_state().await;
    let app = create_test_app(state);

    let (status, body) = get_json(app, "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn list_songs_returns_empty_array_for_empty_catalog() {
    let (state, _temp_dir) = create_test_state().await;
    let app = create_test_app(state);

    let (status, body) = get_json(app, "/api/songs").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn list_songs_returns_songs_newest_first() {
    let (state, _temp_dir) = create_test_state().await;
    insert_song_at(&state.db, "Older Song", "https://example.com/older.mp3", 1_000).await;
    insert_song_at(&state.db, "Newer Song", "https://example.com/newer.mp3", 2_000).await;
    let app = create_test_app(state);

    let (status, body) = get_json(app, "/api/songs").await;

    assert_eq!(status, StatusCode::OK);
    let songs = body.as_array().unwrap();
    assert_eq!(songs.len(), 2);
    assert_eq!(songs[0]["name"], "Newer Song");
    assert_eq!(songs[1]["name"], "Older Song");
}

#[tokio::test]
async fn list_songs_uses_the_wire_field_names() {
    let (state, _temp_dir) = create_test_state().await;
    insert_song_at(
        &state.db,
        "Wire Song",
        "https://example.com/wire.mp3",
        1_700_000_000_000,
    )
    .await;
    let app = create_test_app(state);

    let (_, body) = get_json(app, "/api/songs").await;

    let song = &body.as_array().unwrap()[0];
    assert!(song["id"].is_i64());
    assert_eq!(song["name"], "Wire Song");
    assert_eq!(song["audioUrl"], "https://example.com/wire.mp3");
    // ISO-8601 timestamp on the wire
    let created_at = song["created_at"].as_str().unwrap();
    assert!(created_at.starts_with("2023-11-14T22:13:20"));
}

#[tokio::test]
async fn get_song_returns_matching_song() {
    let (state, _temp_dir) = create_test_state().await;
    let id = insert_song_at(&state.db, "Test Song", "https://example.com/test.mp3", 1_000).await;
    let app = create_test_app(state);

    let (status, body) = get_json(app, &format!("/api/songs/{}", id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id);
    assert_eq!(body["name"], "Test Song");
    assert_eq!(body["audioUrl"], "https://example.com/test.mp3");
}

#[tokio::test]
async fn get_song_returns_null_for_missing_song() {
    let (state, _temp_dir) = create_test_state().await;
    let app = create_test_app(state);

    let request = Request::builder()
        .uri("/api/songs/999")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    // Absent is the null sentinel, not an HTTP error
    assert_eq!(response.status(), StatusCode::OK);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body_bytes[..], b"null");
}

#[tokio::test]
async fn get_song_rejects_non_positive_ids() {
    let (state, _temp_dir) = create_test_state().await;
    // Seed one song to prove validation short-circuits before lookup
    insert_song_at(&state.db, "Song", "https://example.com/song.mp3", 1_000).await;
    let app = create_test_app(state);

    let (status, body) = get_json(app.clone(), "/api/songs/0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("positive"));

    let (status, _) = get_json(app, "/api/songs/-1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_song_rejects_non_integer_ids() {
    let (state, _temp_dir) = create_test_state().await;
    let app = create_test_app(state);

    let request = Request::builder()
        .uri("/api/songs/abc")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn storage_failure_maps_to_internal_error() {
    let (state, _temp_dir) = create_test_state().await;
    // Closing the pool makes every query fail with a storage error
    state.db.close().await;
    let app = create_test_app(state);

    let (status, body) = get_json(app, "/api/songs").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Database error");
}
