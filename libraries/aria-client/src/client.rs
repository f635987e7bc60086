//! HTTP client for the Aria server API.

use aria_core::types::{GetSongInput, Song, SongId};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::error::{ClientError, Result};

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the Aria server (http or https)
    pub url: String,
}

impl ClientConfig {
    /// Create a configuration for the given base URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Client for the Aria server's read-only query API.
///
/// # Example
///
/// ```ignore
/// use aria_client::{AriaClient, ClientConfig};
///
/// let client = AriaClient::new(ClientConfig::new("https://music.example.com"))?;
/// let songs = client.list_songs().await?;
/// println!("Found {} songs", songs.len());
/// ```
pub struct AriaClient {
    http: Client,
    base_url: String,
}

impl AriaClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        // Validate URL
        if config.url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        // Parse and normalize URL
        let base_url = config.url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        // Create HTTP client with reasonable defaults
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Aria/{} (Client)", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self { http, base_url })
    }

    /// Get the normalized server base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the full song list, newest first.
    pub async fn list_songs(&self) -> Result<Vec<Song>> {
        let url = format!("{}/api/songs", self.base_url);
        debug!(url = %url, "Fetching song list");

        let response = self.http.get(&url).send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                ClientError::Unreachable(e.to_string())
            } else {
                ClientError::Request(e)
            }
        })?;

        let status = response.status();

        if status.is_success() {
            let songs: Vec<Song> = response.json().await.map_err(|e| {
                ClientError::Parse(format!("Failed to parse song list: {}", e))
            })?;

            debug!(count = songs.len(), "Fetched song list");

            Ok(songs)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(ClientError::Server {
                status: status.as_u16(),
                message,
            })
        }
    }

    /// Fetch a single song by id.
    ///
    /// Returns `Ok(None)` when the server reports no matching song (the
    /// `null` sentinel). A non-positive id is rejected locally before any
    /// request is issued.
    pub async fn get_song(&self, id: SongId) -> Result<Option<Song>> {
        GetSongInput { id }.validate()?;

        let url = format!("{}/api/songs/{}", self.base_url, id);
        debug!(url = %url, "Fetching song");

        let response = self.http.get(&url).send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                ClientError::Unreachable(e.to_string())
            } else {
                ClientError::Request(e)
            }
        })?;

        let status = response.status();

        if status.is_success() {
            let song: Option<Song> = response.json().await.map_err(|e| {
                ClientError::Parse(format!("Failed to parse song response: {}", e))
            })?;

            Ok(song)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(ClientError::Server {
                status: status.as_u16(),
                message,
            })
        }
    }
}
