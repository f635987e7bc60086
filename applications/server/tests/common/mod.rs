//! Shared helpers for server integration tests

use aria_server::state::AppState;
use tempfile::TempDir;

/// Create application state backed by a real temp-file SQLite database
/// with migrations applied. The TempDir must stay alive for the test.
pub async fn create_test_state() -> (AppState, TempDir) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let db_url = format!("sqlite://{}", db_path.display());

    let pool = aria_storage::create_pool(&db_url)
        .await
        .expect("Failed to create pool");

    aria_storage::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    (AppState::new(pool), temp_dir)
}

/// Insert a song with an explicit creation timestamp (unix milliseconds),
/// returning the generated id
pub async fn insert_song_at(
    pool: &sqlx::SqlitePool,
    name: &str,
    audio_url: &str,
    created_ms: i64,
) -> i64 {
    let result = sqlx::query("INSERT INTO songs (name, audio_url, created_at) VALUES (?, ?, ?)")
        .bind(name)
        .bind(audio_url)
        .bind(created_ms)
        .execute(pool)
        .await
        .expect("Failed to insert test song");

    result.last_insert_rowid()
}
