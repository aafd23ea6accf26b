//! UI rendering helpers for the terminal user interface.
//!
//! This module renders the dashboard using `ratatui`. The layout is computed
//! by [`layout::compute`] so the runtime can hit-test mouse clicks against the
//! exact rectangles that were drawn.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};
use std::{collections::BTreeMap, sync::LazyLock};

use crate::app::App;
use crate::config::{ControlsSettings, UiSettings};
use crate::player::{MediaElement, RepeatMode};

mod circular;
mod control_panel;
mod drop_zone;
mod effects;
mod layout;
mod track_info;

pub use layout::{Areas, Hit, compute};

static CONTROLS_MAP: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = BTreeMap::new();
    map.insert("space", "play/pause");
    map.insert("←/→", "prev/next");
    map.insert("x", "stop");
    map.insert("m", "mute");
    map.insert("s", "shuffle");
    map.insert("r", "repeat");
    map.insert("o", "open file");
    map.insert("q", "quit");
    map
});

/// Render the controls help text, incorporating the configured steps.
fn controls_text(volume_step: u8, scrub_seconds: u64) -> String {
    // Keep the rendered order stable and human-friendly.
    let order = ["space", "←/→", "↑/↓", "H/L", "x", "m", "s", "r", "o", "q"];
    order
        .iter()
        .filter_map(|k| match *k {
            "↑/↓" => Some(format!("[↑/↓] volume +/-{volume_step}")),
            "H/L" => Some(format!("[H/L] scrub -/+{scrub_seconds}s")),
            _ => CONTROLS_MAP.get(*k).map(|v| format!("[{k}] {v}")),
        })
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Format seconds as `M:SS`, truncating partial seconds.
pub fn format_time(seconds: f64) -> String {
    let secs = if seconds.is_finite() && seconds > 0.0 {
        seconds as u64
    } else {
        0
    };
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    // Keep the popup smaller and avoid covering the entire UI.
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(5);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width: width.min(r.width),
        height: height.min(r.height),
    }
}

/// A one-row bar filled to `fraction` of `width` cells.
fn bar_line(width: u16, fraction: f64, fill: Color) -> Line<'static> {
    let width = usize::from(width);
    let filled = ((fraction.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    Line::from(vec![
        Span::styled("━".repeat(filled), Style::default().fg(fill)),
        Span::styled(
            "─".repeat(width - filled),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

fn status_text<M: MediaElement>(app: &App<M>) -> String {
    let state = app.controller.state();
    let mut parts: Vec<String> = Vec::new();

    let status = if app.controller.resume_pending() {
        "Loading"
    } else if state.playing {
        "Playing"
    } else {
        "Paused"
    };
    parts.push(status.to_string());
    parts.push(format!(
        "Shuffle: {}",
        if state.shuffle { "ON" } else { "OFF" }
    ));
    let repeat = match state.repeat {
        RepeatMode::Off => "Repeat: off",
        RepeatMode::All => "Repeat: all",
        RepeatMode::One => "Repeat: one",
    };
    parts.push(repeat.to_string());
    let total = app.controller.playlist().len();
    if total > 0 {
        parts.push(format!(
            "Track {}/{total}",
            app.controller.current_index() + 1
        ));
    }
    if !app.origin.is_empty() {
        parts.push(format!("Source: {}", app.origin));
    }

    parts.join(" • ")
}

/// Render the entire UI into the provided `frame` using `app` state and settings.
pub fn draw<M: MediaElement>(
    frame: &mut Frame,
    app: &App<M>,
    ui_settings: &UiSettings,
    controls_settings: &ControlsSettings,
) {
    let screen = frame.area();
    let areas = compute(screen);
    let state = app.controller.state();
    let track = app.controller.current_track();

    // Header
    let header = Paragraph::new(status_text(app))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", ui_settings.header_text))
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, areas.header);

    let effects = ui_settings.effects.then_some(&app.effects);
    circular::render(frame, &areas, state, track, effects, app.ring_hover);
    track_info::render(frame, &areas, state, track);
    control_panel::render(frame, &areas, state);

    let footer_text = controls_text(controls_settings.volume_step, controls_settings.scrub_seconds);
    let footer = Paragraph::new(footer_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" shortcuts ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, areas.footer);

    if app.drop_zone.active {
        drop_zone::render(frame, screen, &app.drop_zone);
    }
}

#[cfg(test)]
mod tests;
