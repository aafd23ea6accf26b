//! Playback controller.
//!
//! `PlaybackController` owns the playlist and transport state and drives a
//! [`MediaElement`]. UI code calls its methods; the audio backend reports back
//! through [`MediaEvent`]s.

mod controller;
mod media;
mod state;

pub use controller::PlaybackController;
pub use media::{MediaElement, MediaError, MediaEvent};
pub use state::{PlaybackState, RepeatMode};
