//! Media resource abstraction

use crate::error::Result;

/// The platform media element behind the playback controller
///
/// One instance exists per client session. The controller is its only
/// writer; selecting a new song always rebinds this same resource rather
/// than creating another one.
pub trait MediaResource {
    /// Set the playback source and begin an asynchronous load.
    ///
    /// Implementations must stop any playback of the previously bound
    /// source. Load failures are reported later through
    /// [`crate::MediaEvent::Error`].
    fn bind(&mut self, url: &str);

    /// Attempt to start playback of the bound source.
    ///
    /// `Err` is the synchronous rejection path (resource inaccessible,
    /// playback refused). An attempt that fails only after this call
    /// returns resolves through [`crate::MediaEvent::Error`].
    fn play(&mut self) -> Result<()>;

    /// Pause playback, keeping the current position.
    fn pause(&mut self);

    /// Seek back to the start of the bound source.
    fn rewind(&mut self);
}
