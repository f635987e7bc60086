//! Catalog loading with fallback.
//!
//! The loader makes exactly one `list_songs` attempt at startup. On
//! success the live catalog is published; on any failure the hardcoded
//! fallback catalog takes its place. The result is tagged so consumers
//! render the degraded-mode notice from the tag itself rather than from a
//! separate flag.

use aria_core::types::Song;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::client::AriaClient;

/// All fallback entries share one placeholder source.
const FALLBACK_AUDIO_URL: &str = "https://www.soundjay.com/misc/sounds/bell-ringing-05.wav";

/// The active catalog, tagged by origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Catalog {
    /// Songs fetched from the server
    Live(Vec<Song>),

    /// The hardcoded fallback catalog, active because the live query
    /// failed (degraded mode)
    Fallback(Vec<Song>),
}

impl Catalog {
    /// The songs to display, regardless of origin.
    pub fn songs(&self) -> &[Song] {
        match self {
            Catalog::Live(songs) | Catalog::Fallback(songs) => songs,
        }
    }

    /// Whether the catalog is the fallback dataset.
    ///
    /// Consumers must surface this as a visible notice; fallback data is
    /// never allowed to pass for live data.
    pub fn is_degraded(&self) -> bool {
        matches!(self, Catalog::Fallback(_))
    }
}

/// Loads the catalog once at startup.
pub struct CatalogLoader {
    client: AriaClient,
}

impl CatalogLoader {
    /// Create a loader over the given client.
    pub fn new(client: AriaClient) -> Self {
        Self { client }
    }

    /// Fetch the catalog.
    ///
    /// A single attempt is made; there is no retry or backoff. Any
    /// failure (unreachable server, error response, malformed body)
    /// activates the fallback catalog.
    pub async fn load(&self) -> Catalog {
        match self.client.list_songs().await {
            Ok(songs) => {
                debug!(count = songs.len(), "Loaded live catalog");
                Catalog::Live(songs)
            }
            Err(e) => {
                warn!(error = %e, "Catalog fetch failed, using fallback catalog");
                Catalog::Fallback(fallback_songs())
            }
        }
    }
}

fn fallback_created_at(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

/// The deterministic four-entry fallback catalog.
pub fn fallback_songs() -> Vec<Song> {
    vec![
        Song {
            id: 1,
            name: "Classical Symphony No. 1".to_string(),
            audio_url: FALLBACK_AUDIO_URL.to_string(),
            created_at: fallback_created_at(1),
        },
        Song {
            id: 2,
            name: "Jazz Blues Melody".to_string(),
            audio_url: FALLBACK_AUDIO_URL.to_string(),
            created_at: fallback_created_at(2),
        },
        Song {
            id: 3,
            name: "Rock Guitar Anthem".to_string(),
            audio_url: FALLBACK_AUDIO_URL.to_string(),
            created_at: fallback_created_at(3),
        },
        Song {
            id: 4,
            name: "Electronic Dance Beat".to_string(),
            audio_url: FALLBACK_AUDIO_URL.to_string(),
            created_at: fallback_created_at(4),
        },
    ]
}
