/// Songs API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use aria_core::types::{GetSongInput, Song, SongId};
use aria_storage::songs;
use axum::{
    extract::{Path, State},
    Json,
};

/// GET /api/songs
///
/// All songs, newest first. An empty catalog is an empty array, not an
/// error.
pub async fn list_songs(State(app_state): State<AppState>) -> Result<Json<Vec<Song>>> {
    let songs = songs::get_all(&app_state.db).await?;
    Ok(Json(songs))
}

/// GET /api/songs/:id
///
/// The matching song, or the JSON `null` sentinel when no row matches.
/// A non-positive id is rejected with 400 before storage is touched.
pub async fn get_song(
    Path(id): Path<SongId>,
    State(app_state): State<AppState>,
) -> Result<Json<Option<Song>>> {
    let input = GetSongInput { id };
    input
        .validate()
        .map_err(|e| ServerError::BadRequest(e.to_string()))?;

    let song = songs::get_by_id(&app_state.db, input.id).await?;
    Ok(Json(song))
}
