//! Error types for playback control

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// The media resource rejected the start attempt
    #[error("Playback start rejected: {0}")]
    StartRejected(String),

    /// The media resource failed to load its source
    #[error("Media load failed: {0}")]
    LoadFailed(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
