//! Aria Playback
//!
//! Platform-agnostic playback control for Aria.
//!
//! This crate provides:
//! - The transport state machine (select / play-pause / stop)
//! - Session telemetry (position, duration, last error)
//! - Ordered dispatch of media resource events into the state machine
//!
//! # Architecture
//!
//! `aria-playback` is completely platform-agnostic: the actual media
//! element (an HTML audio element, a native player, a test double) is
//! provided via the [`MediaResource`] trait. Exactly one resource instance
//! exists per controller; selecting a new song rebinds the same resource,
//! so at most one song is audible at a time.
//!
//! Resource lifecycle events ([`MediaEvent`]) are applied synchronously
//! and in order through [`PlaybackController::handle_event`]; no two event
//! handlers ever run concurrently.
//!
//! # Example
//!
//! ```rust
//! use aria_playback::{MediaResource, PlaybackController, PlaybackError, PlayerState};
//!
//! // Implement MediaResource for your platform
//! struct NullResource;
//!
//! impl MediaResource for NullResource {
//!     fn bind(&mut self, _url: &str) {}
//!     fn play(&mut self) -> Result<(), PlaybackError> {
//!         Ok(())
//!     }
//!     fn pause(&mut self) {}
//!     fn rewind(&mut self) {}
//! }
//!
//! let mut controller = PlaybackController::new(NullResource);
//!
//! // Transport operations are no-ops until a song is selected
//! controller.play_pause();
//! assert_eq!(controller.state(), PlayerState::Idle);
//! ```

mod controller;
mod error;
mod events;
mod resource;
pub mod types;

// Public exports
pub use controller::PlaybackController;
pub use error::{PlaybackError, Result};
pub use events::MediaEvent;
pub use resource::MediaResource;
pub use types::{PlaybackSession, PlayerState};
