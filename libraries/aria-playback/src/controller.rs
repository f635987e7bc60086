//! Playback controller - transport state machine
//!
//! Owns the one media resource for the session and keeps the discrete
//! state and session telemetry consistent with it.

use aria_core::types::Song;

use crate::events::MediaEvent;
use crate::resource::MediaResource;
use crate::types::{PlaybackSession, PlayerState};

/// Transport state machine over a single [`MediaResource`]
///
/// Instantiated once per client session and passed by reference to UI
/// bindings; there is no ambient singleton. All mutation goes through the
/// transport operations and [`handle_event`](Self::handle_event), so the
/// invariant `playing == true implies a song is selected` holds at every
/// observable point.
pub struct PlaybackController<R: MediaResource> {
    resource: R,
    state: PlayerState,
    session: PlaybackSession,
}

impl<R: MediaResource> PlaybackController<R> {
    /// Create a controller owning the session's media resource
    pub fn new(resource: R) -> Self {
        Self {
            resource,
            state: PlayerState::Idle,
            session: PlaybackSession::default(),
        }
    }

    /// Current discrete state
    pub fn state(&self) -> PlayerState {
        self.state
    }

    /// Current session telemetry
    pub fn session(&self) -> &PlaybackSession {
        &self.session
    }

    /// Select a song for playback
    ///
    /// Valid from any state. Rebinds the shared resource to the song's
    /// audio URL (which stops anything currently audible and starts an
    /// asynchronous load), resets position and duration, and clears any
    /// previous error.
    pub fn select_song(&mut self, song: Song) {
        self.resource.bind(&song.audio_url);

        self.session.selected_song = Some(song);
        self.session.playing = false;
        self.session.position_seconds = 0.0;
        self.session.duration_seconds = 0.0;
        self.session.last_error = None;
        self.state = PlayerState::Ready;
    }

    /// Toggle playback
    ///
    /// No-op when no song is selected (no resource interaction). From
    /// `Playing`, pauses synchronously. From `Ready` or `Error`, attempts
    /// to start playback: a rejected attempt lands in `Error` with a
    /// message, never in `Playing`. An attempt that fails only after the
    /// resource accepted it resolves through [`MediaEvent::Error`].
    pub fn play_pause(&mut self) {
        if self.session.selected_song.is_none() {
            return;
        }

        match self.state {
            PlayerState::Playing => {
                self.resource.pause();
                self.session.playing = false;
                self.state = PlayerState::Ready;
            }
            PlayerState::Ready | PlayerState::Error => match self.resource.play() {
                Ok(()) => {
                    self.session.playing = true;
                    self.session.last_error = None;
                    self.state = PlayerState::Playing;
                }
                Err(e) => {
                    self.session.playing = false;
                    self.session.last_error = Some(e.to_string());
                    self.state = PlayerState::Error;
                }
            },
            // Unreachable with a song selected; kept explicit
            PlayerState::Idle => {}
        }
    }

    /// Stop playback and rewind to the start
    ///
    /// Valid from `Playing`, `Ready`, and `Error` with a song selected;
    /// no-op otherwise. The song stays selected.
    pub fn stop(&mut self) {
        if self.session.selected_song.is_none() {
            return;
        }

        self.resource.pause();
        self.resource.rewind();
        self.session.playing = false;
        self.session.position_seconds = 0.0;
        self.state = PlayerState::Ready;
    }

    /// Apply one media resource event
    ///
    /// Events are applied atomically and in emission order; telemetry
    /// updates never change the discrete state except for `Ended` (from
    /// `Playing` back to `Ready`) and `Error` (to `Error` whenever a song
    /// is selected).
    pub fn handle_event(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::MetadataReady { duration_seconds } => {
                self.session.duration_seconds = duration_seconds.max(0.0);
            }
            MediaEvent::PositionUpdated { position_seconds } => {
                self.session.position_seconds = position_seconds.max(0.0);
            }
            MediaEvent::Ended => {
                self.session.playing = false;
                self.session.position_seconds = 0.0;
                if self.state == PlayerState::Playing {
                    self.state = PlayerState::Ready;
                }
            }
            MediaEvent::Error { message } => {
                if self.session.selected_song.is_some() {
                    self.session.playing = false;
                    self.session.last_error = Some(message);
                    self.state = PlayerState::Error;
                }
            }
        }
    }

    /// Dismiss the current error message
    ///
    /// Clears `last_error`; when the machine is in `Error` with a song
    /// still selected, returns it to `Ready` (stopped, song bound).
    pub fn dismiss_error(&mut self) {
        self.session.last_error = None;
        if self.state == PlayerState::Error && self.session.selected_song.is_some() {
            self.state = PlayerState::Ready;
        }
    }
}
