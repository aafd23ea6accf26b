use crate::library::TrackSource;

#[derive(Debug)]
pub(super) enum AudioCmd {
    /// Remember a new source; decoded on the next `Load`.
    SetSource(TrackSource),
    /// Fetch and decode the current source into a paused sink at zero.
    Load,
    Play,
    Pause,
    /// Rebuild the sink starting at the given second.
    SetCurrentTime(f64),
    SetVolume(f32),
    /// Quit the audio thread, optionally fading out over `fade_out_ms` milliseconds.
    Quit { fade_out_ms: u64 },
}

#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to fetch {url}: {source}")]
    Fetch { url: String, source: reqwest::Error },

    #[error("failed to decode audio: {0}")]
    Decode(#[from] rodio::decoder::DecoderError),

    #[error("no audio output device: {0}")]
    NoDevice(String),
}
