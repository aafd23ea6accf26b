use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use crate::app::App;
use crate::config;
use crate::library::Track;
use crate::player::{MediaElement, MediaEvent};
use crate::ui::{self, Areas};

use super::keys;

/// Main terminal event loop: drains media and search results, draws a frame
/// and handles input. Returns `Ok(())` when shutdown is requested.
pub fn run<M: MediaElement>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App<M>,
    media_events: &Receiver<MediaEvent>,
    search_results: &Receiver<Vec<Track>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let frame_interval = Duration::from_millis(settings.ui.frame_ms.max(1));
    let mut areas = Areas::default();

    loop {
        while let Ok(ev) = media_events.try_recv() {
            app.controller.handle_media_event(ev);
        }
        while let Ok(tracks) = search_results.try_recv() {
            info!(count = tracks.len(), "adding search results to playlist");
            app.controller.append_tracks(tracks);
        }

        app.frame(Instant::now());

        terminal.draw(|f| {
            areas = ui::compute(f.area());
            ui::draw(f, app, &settings.ui, &settings.controls);
        })?;

        if event::poll(frame_interval)? {
            handle_event(event::read()?, app, &areas);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_event<M: MediaElement>(event: Event, app: &mut App<M>, areas: &Areas) {
    match event {
        Event::Key(key) => keys::dispatch_key(&key, app),
        Event::Mouse(mouse) => handle_mouse(mouse, app, areas),
        // Terminals paste the path of a file dropped onto the window.
        Event::Paste(text) => {
            app.drop_text(&text);
        }
        _ => {}
    }
}

fn handle_mouse<M: MediaElement>(mouse: MouseEvent, app: &mut App<M>, areas: &Areas) {
    let hit = areas.hit(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if app.drop_zone.active {
                return;
            }
            if let Some(hit) = hit {
                app.click(hit);
            }
        }
        MouseEventKind::Moved => app.hover(hit),
        _ => {}
    }
}
