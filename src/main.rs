//! orbit: a circular music player for the terminal.
//!
//! A playback controller drives a `rodio` output on its own thread and is
//! rendered by a `ratatui` dashboard: a circular progress ring, track info,
//! a control panel and a decorative particle field.

mod app;
mod audio;
mod cli;
mod config;
mod effects;
mod library;
mod logging;
mod player;
mod runtime;
mod search;
mod ui;

use clap::Parser;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = cli::Cli::parse();
    runtime::run(cli)
}
