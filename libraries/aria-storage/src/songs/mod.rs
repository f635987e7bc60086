//! Songs vertical slice
//!
//! Read queries over the `songs` relation plus the seeding insert path.
//! Absent rows are `Ok(None)`, never an error; storage failures propagate
//! as `StorageError`.

use aria_core::types::{CreateSong, Song, SongId};
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::error::{Result, StorageError};

fn song_from_row(row: &SqliteRow) -> Result<Song> {
    let created_ms: i64 = row.get("created_at");
    let created_at = DateTime::<Utc>::from_timestamp_millis(created_ms).ok_or_else(|| {
        StorageError::Query(format!("invalid created_at timestamp: {}", created_ms))
    })?;

    Ok(Song {
        id: row.get::<i64, _>("id"),
        name: row.get("name"),
        audio_url: row.get("audio_url"),
        created_at,
    })
}

/// Get all songs, ordered by creation time descending (newest first)
///
/// Rows with equal `created_at` come back in insertion order. An empty
/// table yields an empty vec.
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Song>> {
    let rows = sqlx::query(
        "SELECT id, name, audio_url, created_at
         FROM songs
         ORDER BY created_at DESC, id",
    )
    .fetch_all(pool)
    .await?;

    rows.iter().map(song_from_row).collect()
}

/// Get a song by id, or `None` when no row matches
pub async fn get_by_id(pool: &SqlitePool, id: SongId) -> Result<Option<Song>> {
    let row = sqlx::query(
        "SELECT id, name, audio_url, created_at
         FROM songs
         WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(song_from_row).transpose()
}

/// Insert a new song (seeding path; not exposed over HTTP)
///
/// `created_at` is bound at insertion time and the generated id comes back
/// on the returned record.
pub async fn insert(pool: &SqlitePool, input: CreateSong) -> Result<Song> {
    let created_ms = Utc::now().timestamp_millis();

    let result = sqlx::query("INSERT INTO songs (name, audio_url, created_at) VALUES (?, ?, ?)")
        .bind(&input.name)
        .bind(&input.audio_url)
        .bind(created_ms)
        .execute(pool)
        .await?;

    let created_at = DateTime::<Utc>::from_timestamp_millis(created_ms).ok_or_else(|| {
        StorageError::Query(format!("invalid created_at timestamp: {}", created_ms))
    })?;

    Ok(Song {
        id: result.last_insert_rowid(),
        name: input.name,
        audio_url: input.audio_url,
        created_at,
    })
}
