/// Song domain type
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AriaError, Result};

/// Catalog song identifier (positive, assigned by storage)
pub type SongId = i64;

/// Catalog entry
///
/// `id` uniquely identifies a song; `created_at` is assigned once at
/// insertion and never updated. The audio URL is opaque to everything but
/// the media resource that ultimately plays it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    /// Unique song identifier (positive, server-assigned)
    pub id: SongId,

    /// Display name
    pub name: String,

    /// Absolute URL of the playback source
    #[serde(rename = "audioUrl")]
    pub audio_url: String,

    /// When the song was added to the catalog
    pub created_at: DateTime<Utc>,
}

/// Input for inserting a new song
///
/// Used only by seeding paths and tests; no create/update/delete operation
/// is exposed over HTTP.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSong {
    /// Display name (must be non-empty)
    pub name: String,

    /// Absolute http(s) URL of the playback source
    #[serde(rename = "audioUrl")]
    pub audio_url: String,
}

impl CreateSong {
    /// Create a new seeding input
    pub fn new(name: impl Into<String>, audio_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            audio_url: audio_url.into(),
        }
    }

    /// Check the input against the catalog invariants
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(AriaError::validation("song name must not be empty"));
        }

        let url = Url::parse(&self.audio_url)
            .map_err(|e| AriaError::validation(format!("invalid audio URL: {}", e)))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(AriaError::validation(format!(
                "audio URL must use http or https, got {}",
                url.scheme()
            )));
        }

        Ok(())
    }
}

/// Input for looking up a single song by id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetSongInput {
    /// Identifier to look up (must be positive)
    pub id: SongId,
}

impl GetSongInput {
    /// Reject non-positive ids before any storage access
    pub fn validate(&self) -> Result<()> {
        if self.id <= 0 {
            return Err(AriaError::validation(format!(
                "song id must be a positive integer, got {}",
                self.id
            )));
        }
        Ok(())
    }
}
