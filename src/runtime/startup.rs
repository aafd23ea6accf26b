use std::path::Path;

use tracing::{info, warn};

use crate::app::App;
use crate::cli::Cli;
use crate::config::{PlaylistSource, Settings};
use crate::library::{Track, mock_playlist, scan, track_from_paths};
use crate::player::MediaElement;

/// The startup playlist and a short label for where it came from.
///
/// Playback needs at least one track, so an empty scan falls back to the
/// demo tracks.
pub fn initial_playlist(cli: &Cli, settings: &Settings) -> (Vec<Track>, String) {
    if cli.mock || settings.library.source == PlaylistSource::Mock {
        return (mock_playlist(), "demo".to_string());
    }
    let Some(dir) = cli.dir.as_deref() else {
        info!("no music directory given; using demo tracks");
        return (mock_playlist(), "demo".to_string());
    };

    let tracks = scan(dir, &settings.library);
    if tracks.is_empty() {
        warn!(dir = %dir.display(), "no audio files found; using demo tracks");
        return (mock_playlist(), "demo".to_string());
    }
    info!(dir = %dir.display(), count = tracks.len(), "library scanned");
    (tracks, dir.display().to_string())
}

/// Load `--file` as the current track, if it is an audio file.
pub fn load_startup_file<M: MediaElement>(app: &mut App<M>, file: Option<&Path>) {
    let Some(path) = file else {
        return;
    };
    match track_from_paths(&[path.to_path_buf()]) {
        Some(track) => app.controller.load_track(track),
        None => warn!(path = %path.display(), "--file is not a readable audio file"),
    }
}
