use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

use crate::app::App;
use crate::audio::RodioElement;
use crate::cli::Cli;
use crate::effects::VisualEffects;
use crate::library::Track;
use crate::player::PlaybackController;
use crate::{logging, search};

mod event_loop;
mod keys;
mod settings;
mod startup;

pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let (settings, config_warning) = settings::load_settings();

    if cli.print_config {
        print!("{}", settings.to_toml()?);
        return Ok(());
    }

    match logging::init(&settings.logging) {
        Ok(Some(path)) => info!(log = %path.display(), "orbit starting"),
        Ok(None) => {}
        Err(e) => eprintln!("orbit: logging disabled: {e}"),
    }
    if let Some(msg) = config_warning {
        warn!("{msg}");
    }

    let (playlist, origin) = startup::initial_playlist(&cli, &settings);
    let (media, media_rx) = RodioElement::spawn(settings.audio.clone());
    let controller = PlaybackController::new(media, playlist, &settings);
    let effects = VisualEffects::new(settings.ui.particle_count);
    let mut app = App::new(controller, effects, &settings.controls);
    app.set_origin(origin);
    startup::load_startup_file(&mut app, cli.file.as_deref());

    let (search_tx, search_rx) = mpsc::channel::<Vec<Track>>();
    if settings.search.enabled && !cli.offline {
        // Detached: results arrive on the channel or not at all.
        let _ = search::spawn_startup_search(settings.search.clone(), search_tx);
    } else {
        drop(search_tx);
    }

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut app, &media_rx, &search_rx);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    app.controller
        .media_mut()
        .quit_softly(Duration::from_millis(settings.audio.quit_fade_out_ms));
    info!("orbit stopped");

    run_result
}
