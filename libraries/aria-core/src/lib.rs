//! Aria Core
//!
//! Platform-agnostic core types, validation, and error handling for Aria.
//!
//! This crate provides the foundational building blocks used by the storage
//! layer, the HTTP server, and the client-side catalog/playback crates.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Song`, `CreateSong`, `GetSongInput`
//! - **Validation**: input checks shared by server and client surfaces
//! - **Error Handling**: unified `AriaError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use aria_core::types::{CreateSong, GetSongInput};
//!
//! // Seeding input for a new catalog entry
//! let song = CreateSong::new("My Favorite Song", "https://music.example.com/song.mp3");
//! assert!(song.validate().is_ok());
//!
//! // Lookup input, rejected before storage is touched
//! let input = GetSongInput { id: 0 };
//! assert!(input.validate().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{AriaError, Result};
pub use types::{CreateSong, GetSongInput, Song, SongId};
