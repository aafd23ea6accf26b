use std::path::{Path, PathBuf};

use lofty::file::FileType;

pub const UNKNOWN_ARTIST: &str = "Unknown Artist";
pub const UNKNOWN_ALBUM: &str = "Unknown Album";
pub const UNKNOWN_GENRE: &str = "Unknown";
pub const DEFAULT_ARTWORK: &str =
    "https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f?w=400&h=400&fit=crop";

/// Where the audio for a track lives.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TrackSource {
    /// Metadata only; nothing to play.
    #[default]
    None,
    /// A file on disk.
    File(PathBuf),
    /// A remote URL fetched in full before decoding.
    Url(String),
}

impl TrackSource {
    pub fn is_none(&self) -> bool {
        matches!(self, TrackSource::None)
    }
}

/// A single playable item. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub id: u64,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub genre: String,
    pub year: String,
    /// Seconds; 0 until the player reports metadata.
    pub duration: f64,
    pub format: String,
    pub artwork: String,
    pub source: TrackSource,
}

/// MIME type for an audio file, derived from its extension.
///
/// Returns `None` for anything that is not a known audio container.
pub fn audio_mime(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?;
    let mime = match FileType::from_ext(ext)? {
        FileType::Mpeg => "audio/mpeg",
        FileType::Flac => "audio/flac",
        FileType::Wav => "audio/wav",
        FileType::Vorbis => "audio/ogg",
        FileType::Opus => "audio/opus",
        FileType::Speex => "audio/speex",
        FileType::Mp4 => "audio/mp4",
        FileType::Aac => "audio/aac",
        FileType::Aiff => "audio/aiff",
        FileType::Ape => "audio/ape",
        FileType::WavPack => "audio/wavpack",
        FileType::Mpc => "audio/musepack",
        _ => return None,
    };
    Some(mime)
}

/// Upper-cased MIME subtype: `audio/mpeg` -> `MPEG`.
pub fn format_label(mime: &str) -> String {
    mime.split('/')
        .nth(1)
        .filter(|s| !s.is_empty())
        .map(str::to_ascii_uppercase)
        .unwrap_or_else(|| "UNKNOWN".to_string())
}

/// File name without its final extension.
pub fn title_from_path(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.trim().is_empty())
        .unwrap_or("UNKNOWN")
        .to_string()
}
