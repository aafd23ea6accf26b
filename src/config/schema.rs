use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/orbit/config.toml` or `~/.config/orbit/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `ORBIT__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub audio: AudioSettings,
    pub controls: ControlsSettings,
    pub playback: PlaybackSettings,
    pub library: LibrarySettings,
    pub search: SearchSettings,
    pub ui: UiSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Volume (0-100) the player starts with.
    pub startup_volume: u8,
    /// Delay before playback resumes after next/previous swaps the source (milliseconds).
    pub resume_delay_ms: u64,
    /// How often the audio thread reports elapsed time (milliseconds).
    pub tick_ms: u64,
    /// Fade-out duration when quitting (milliseconds).
    /// Set to 0 to stop immediately.
    pub quit_fade_out_ms: u64,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            startup_volume: 75,
            resume_delay_ms: 100,
            tick_ms: 250,
            quit_fade_out_ms: 300,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ControlsSettings {
    /// Volume change applied by the Up/Down arrow keys.
    pub volume_step: u8,
    /// Number of seconds to scrub when pressing `H` / `L`.
    pub scrub_seconds: u64,
}

impl Default for ControlsSettings {
    fn default() -> Self {
        Self {
            volume_step: 5,
            scrub_seconds: 5,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Whether shuffle starts enabled.
    pub shuffle: bool,
    /// Repeat mode the player starts in.
    pub repeat: RepeatSetting,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepeatSetting {
    #[default]
    #[serde(alias = "none", alias = "no-loop")]
    Off,
    #[serde(alias = "loop-all", alias = "repeat-all")]
    All,
    #[serde(alias = "loop-one", alias = "repeat-one")]
    One,
}

/// Where the startup playlist comes from.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlaylistSource {
    /// The built-in demo tracks.
    Mock,
    /// Audio files found under the music directory.
    #[default]
    Local,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Startup playlist origin.
    pub source: PlaylistSource,
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            source: PlaylistSource::Local,
            extensions: vec![
                "mp3".into(),
                "flac".into(),
                "wav".into(),
                "ogg".into(),
                "m4a".into(),
            ],
            follow_links: true,
            include_hidden: false,
            recursive: true,
            max_depth: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SearchQuery {
    /// Free-text search term.
    pub term: String,
    /// Two-letter store country code.
    pub country: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Whether the remote search runs at startup.
    pub enabled: bool,
    /// Search endpoint (iTunes Search API compatible).
    pub endpoint: String,
    /// Maximum results per query.
    pub limit: u32,
    /// Queries issued together at startup.
    pub queries: Vec<SearchQuery>,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: "https://itunes.apple.com/search".to_string(),
            limit: 10,
            queries: vec![
                SearchQuery {
                    term: "lofi".to_string(),
                    country: "US".to_string(),
                },
                SearchQuery {
                    term: "city pop".to_string(),
                    country: "JP".to_string(),
                },
            ],
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
    /// Frame interval of the render/animation loop (milliseconds).
    pub frame_ms: u64,
    /// Number of particles in the effects field.
    pub particle_count: usize,
    /// Whether the particle field and rings are drawn at all.
    pub effects: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: "Circular Music Player".to_string(),
            frame_ms: 33,
            particle_count: 50,
            effects: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Level filter for the `orbit` target; `RUST_LOG` overrides it.
    pub level: String,
    /// Log file; defaults to the XDG state directory.
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}
