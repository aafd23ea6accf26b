use crate::library::TrackSource;

/// The host playback primitive the controller drives.
pub trait MediaElement {
    /// Replace the current source. Takes effect on the next `load`.
    fn set_source(&mut self, source: &TrackSource);
    /// (Re)load the current source, paused at position zero.
    fn load(&mut self);
    /// Start or resume playback.
    fn play(&mut self) -> Result<(), MediaError>;
    fn pause(&mut self);
    /// Jump to `seconds` into the current source.
    fn set_current_time(&mut self, seconds: f64);
    /// Output gain in `0.0..=1.0`.
    fn set_volume(&mut self, volume: f32);
}

/// Notifications from the playback primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaEvent {
    /// Elapsed playback time, in seconds.
    TimeUpdate(f64),
    /// Total duration became known, in seconds.
    LoadedMetadata(f64),
    /// The source played to completion.
    Ended,
}

#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("no playable source loaded")]
    NoSource,

    #[error("audio backend is gone")]
    Disconnected,
}
