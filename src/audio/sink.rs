//! Utilities for turning a `TrackSource` into a paused `rodio` sink.
//!
//! Sources are read fully into memory once per load so seeking can rebuild
//! the sink without touching the disk or network again. Remote sources are
//! fetched by [`super::fetch`] on a worker thread.

use std::io::Cursor;
use std::sync::Arc;
use std::time::Duration;

use lofty::file::AudioFile;
use lofty::probe::Probe;
use rodio::{Decoder, OutputStream, Sink, Source};

use crate::library::TrackSource;

use super::types::AudioError;

pub(super) type SourceBytes = Arc<[u8]>;

/// Read the whole source. `TrackSource::None` yields `Ok(None)`.
pub(super) fn read_source(source: &TrackSource) -> Result<Option<SourceBytes>, AudioError> {
    match source {
        TrackSource::None => Ok(None),
        TrackSource::File(path) => std::fs::read(path)
            .map(|bytes| Some(SourceBytes::from(bytes)))
            .map_err(|source| AudioError::Read {
                path: path.display().to_string(),
                source,
            }),
        TrackSource::Url(url) => fetch_url(url, || true),
    }
}

/// Download `url` in full. Gives up with `Ok(None)` once the headers are in if
/// `still_wanted` says the body is no longer needed.
pub(super) fn fetch_url(
    url: &str,
    still_wanted: impl Fn() -> bool,
) -> Result<Option<SourceBytes>, AudioError> {
    let fetch = |source: reqwest::Error| AudioError::Fetch {
        url: url.to_string(),
        source,
    };
    let response = reqwest::blocking::get(url)
        .and_then(|r| r.error_for_status())
        .map_err(fetch)?;
    if !still_wanted() {
        return Ok(None);
    }
    let bytes = response.bytes().map_err(fetch)?;
    Ok(Some(SourceBytes::from(&bytes[..])))
}

/// Duration from container metadata, for formats the decoder cannot size.
pub(super) fn probe_duration(data: &SourceBytes) -> Option<Duration> {
    let tagged = Probe::new(Cursor::new(data.clone()))
        .guess_file_type()
        .ok()?
        .read()
        .ok()?;
    let duration = tagged.properties().duration();
    (!duration.is_zero()).then_some(duration)
}

/// Create a paused `Sink` for `data` that starts playback at `start_at`.
///
/// Also returns the decoder's total duration when it knows it.
pub(super) fn create_sink_at(
    stream: &OutputStream,
    data: &SourceBytes,
    start_at: Duration,
    volume: f32,
) -> Result<(Sink, Option<Duration>), AudioError> {
    let decoder = Decoder::new(Cursor::new(data.clone()))?;
    let total = decoder.total_duration();
    // `skip_duration` is our seeking primitive; even Duration::ZERO is fine.
    let source = decoder.skip_duration(start_at);

    let sink = Sink::connect_new(stream.mixer());
    sink.set_volume(volume);
    sink.append(source);
    sink.pause();
    Ok((sink, total))
}

/// Seconds to a `Duration`; negative, NaN and out-of-range values become zero.
pub(super) fn secs_to_duration(seconds: f64) -> Duration {
    Duration::try_from_secs_f64(seconds).unwrap_or(Duration::ZERO)
}
