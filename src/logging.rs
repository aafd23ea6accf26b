//! File-backed `tracing` setup.
//!
//! The terminal belongs to the UI, so log output goes to
//! `$XDG_STATE_HOME/orbit/orbit.log` (or `~/.local/state/orbit/orbit.log`)
//! unless `logging.file` points elsewhere.

use std::env;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingSettings;

/// Install the global subscriber. `RUST_LOG` wins over `logging.level`.
pub fn init(settings: &LoggingSettings) -> std::io::Result<Option<PathBuf>> {
    let Some(path) = settings.file.clone().or_else(default_log_path) else {
        return Ok(None);
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("orbit={}", settings.level)));

    // A second init (tests, re-entry) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_env_filter(filter)
        .try_init();

    Ok(Some(path))
}

/// `$XDG_STATE_HOME/orbit/orbit.log` or `~/.local/state/orbit/orbit.log`.
pub fn default_log_path() -> Option<PathBuf> {
    let state_home = if let Some(xdg) = env::var_os("XDG_STATE_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".local").join("state"))
    };

    state_home.map(|d| d.join("orbit").join("orbit.log"))
}
