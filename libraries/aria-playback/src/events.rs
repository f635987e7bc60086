//! Media resource events
//!
//! Lifecycle events emitted by the bound media resource and dispatched,
//! synchronously and in emission order, into the playback state machine.

use serde::{Deserialize, Serialize};

/// Events emitted by the media resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MediaEvent {
    /// Source metadata became available
    MetadataReady {
        /// Total duration of the bound source in seconds
        duration_seconds: f64,
    },

    /// Playback position advanced (periodic)
    PositionUpdated {
        /// Current position in seconds
        position_seconds: f64,
    },

    /// Playback reached the natural end of the source
    Ended,

    /// The resource failed to load or play the source
    Error {
        /// Descriptive message for the session
        message: String,
    },
}
