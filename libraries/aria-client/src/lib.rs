//! Aria Client
//!
//! HTTP client library for the Aria server API, plus the startup catalog
//! loader.
//!
//! # Features
//!
//! - **Queries**: fetch the song list, fetch a single song by id
//! - **Catalog loading**: one fetch at startup; any failure activates the
//!   hardcoded fallback catalog, tagged so the UI can render a degraded
//!   notice
//!
//! # Example
//!
//! ```ignore
//! use aria_client::{AriaClient, CatalogLoader, ClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AriaClient::new(ClientConfig::new("https://music.example.com"))?;
//!
//!     let catalog = CatalogLoader::new(client).load().await;
//!     if catalog.is_degraded() {
//!         println!("Note: using predefined songs (server not available)");
//!     }
//!     for song in catalog.songs() {
//!         println!("{} - {}", song.id, song.name);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod catalog;
mod client;
mod error;

// Re-export main types
pub use catalog::{fallback_songs, Catalog, CatalogLoader};
pub use client::{AriaClient, ClientConfig};
pub use error::{ClientError, Result};
