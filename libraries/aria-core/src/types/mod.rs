//! Domain types for the Aria catalog

mod song;

pub use song::{CreateSong, GetSongInput, Song, SongId};
