//! Turning dropped or picked files into tracks.
//!
//! Terminals deliver a file dropped onto the window as pasted text: one or
//! more paths, possibly quoted, backslash-escaped or given as `file://` URIs.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{Datelike, Local, Utc};

use super::model::{
    DEFAULT_ARTWORK, Track, TrackSource, UNKNOWN_ALBUM, UNKNOWN_ARTIST, UNKNOWN_GENRE, audio_mime,
    format_label, title_from_path,
};

/// Split pasted text into candidate paths.
///
/// Whitespace separates paths unless it is quoted or backslash-escaped.
pub fn parse_dropped_paths(text: &str) -> Vec<PathBuf> {
    let mut out = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), c) => current.push(c),
            (None, '\'' | '"') => quote = Some(c),
            (None, '\\') => {
                if let Some(next) = chars.next() {
                    current.push(next);
                }
            }
            (None, c) if c.is_whitespace() => {
                if !current.is_empty() {
                    out.push(normalize(&current));
                    current.clear();
                }
            }
            (None, c) => current.push(c),
        }
    }
    if !current.is_empty() {
        out.push(normalize(&current));
    }
    out
}

fn normalize(raw: &str) -> PathBuf {
    match raw.strip_prefix("file://") {
        Some(rest) => {
            // `file://host/path` is not something a terminal drop produces; keep the path part.
            let decoded = urlencoding::decode(rest)
                .map(|s| s.into_owned())
                .unwrap_or_else(|_| rest.to_string());
            PathBuf::from(decoded)
        }
        None => PathBuf::from(raw),
    }
}

static LAST_DROP_ID: AtomicU64 = AtomicU64::new(0);

/// A millisecond timestamp, bumped past the previous id when drops collide.
fn next_drop_id() -> u64 {
    let now = Utc::now().timestamp_millis().max(0) as u64;
    let prev = LAST_DROP_ID
        .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |last| {
            Some(now.max(last + 1))
        })
        .unwrap_or_else(|last| last);
    now.max(prev + 1)
}

/// Build the track for a dropped file with a known MIME type.
pub fn track_from_file(path: &Path, mime: &str) -> Track {
    Track {
        id: next_drop_id(),
        title: title_from_path(path),
        artist: UNKNOWN_ARTIST.to_string(),
        album: UNKNOWN_ALBUM.to_string(),
        genre: UNKNOWN_GENRE.to_string(),
        year: Local::now().year().to_string(),
        duration: 0.0,
        format: format_label(mime),
        artwork: DEFAULT_ARTWORK.to_string(),
        source: TrackSource::File(path.to_path_buf()),
    }
}

/// The first existing audio file among `paths`, as a track.
pub fn track_from_paths(paths: &[PathBuf]) -> Option<Track> {
    paths.iter().find_map(|p| {
        let mime = audio_mime(p).filter(|m| m.starts_with("audio/"))?;
        p.is_file().then(|| track_from_file(p, mime))
    })
}
