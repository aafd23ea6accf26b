//! Audio backend.
//!
//! A dedicated thread owns the `rodio` output stream and the active sink.
//! [`RodioElement`] is the handle the playback controller talks to: it sends
//! commands over a channel, and the thread reports elapsed time, durations and
//! end-of-track back as [`MediaEvent`](crate::player::MediaEvent)s. Remote
//! sources download on worker threads so the command loop never waits on the
//! network.

mod element;
mod fetch;
mod sink;
mod thread;
mod types;

pub use element::RodioElement;

#[cfg(test)]
mod tests;
