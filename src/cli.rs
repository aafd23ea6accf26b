use std::path::PathBuf;

use clap::Parser;

/// A circular music player for the terminal.
#[derive(Debug, Parser)]
#[command(name = "orbit", version, about)]
pub struct Cli {
    /// Directory to scan for audio files.
    #[arg(env = "ORBIT_MUSIC_DIR")]
    pub dir: Option<PathBuf>,

    /// Load this audio file as the current track on startup.
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Start from the built-in demo playlist instead of scanning.
    #[arg(long)]
    pub mock: bool,

    /// Skip the remote track search.
    #[arg(long)]
    pub offline: bool,

    /// Print the effective configuration as TOML and exit.
    #[arg(long)]
    pub print_config: bool,
}
