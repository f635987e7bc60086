//! Core types for playback control

use aria_core::types::{Song, SongId};
use serde::{Deserialize, Serialize};

/// Discrete playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerState {
    /// No song selected
    Idle,

    /// Song selected, not playing (position may be nonzero when paused
    /// mid-track)
    Ready,

    /// Currently playing
    Playing,

    /// A playback or load error occurred; the song remains selected
    Error,
}

/// Client-local, ephemeral playback session
///
/// Mutated by transport operations and by the media resource's lifecycle
/// events; discarded when a new song is selected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaybackSession {
    /// Currently selected song, if any
    pub selected_song: Option<Song>,

    /// Whether playback is running
    pub playing: bool,

    /// Current position in seconds (always >= 0)
    pub position_seconds: f64,

    /// Total duration in seconds (0 until metadata is known)
    pub duration_seconds: f64,

    /// Last playback error, dismissable, non-fatal
    pub last_error: Option<String>,
}

impl PlaybackSession {
    /// Id of the currently selected song, if any
    pub fn selected_song_id(&self) -> Option<SongId> {
        self.selected_song.as_ref().map(|s| s.id)
    }
}
