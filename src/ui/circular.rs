//! Circular player: progress ring, time readout and transport buttons.

use std::f64::consts::TAU;

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    symbols::Marker,
    text::Line,
    widgets::{
        Block, Borders, Paragraph,
        canvas::{Canvas, Circle, Points},
    },
};

use super::format_time;
use super::layout::{Areas, CANVAS_BOUND, RING_RADIUS};
use crate::effects::VisualEffects;
use crate::library::Track;
use crate::player::PlaybackState;

/// Points along the progress arc for a full turn.
const ARC_STEPS: usize = 360;

/// Coordinates of the progress arc: clockwise from the top, `progress` of a turn.
pub fn arc_points(radius: f64, progress: f64) -> Vec<(f64, f64)> {
    let steps = (ARC_STEPS as f64 * progress.clamp(0.0, 1.0)).round() as usize;
    (0..=steps)
        .map(|k| {
            let theta = k as f64 / ARC_STEPS as f64 * TAU;
            (radius * theta.sin(), radius * theta.cos())
        })
        .collect()
}

pub fn render(
    frame: &mut Frame,
    areas: &Areas,
    state: &PlaybackState,
    track: Option<&Track>,
    effects: Option<&VisualEffects>,
    hover: bool,
) {
    let title = match track {
        Some(t) => format!(" {} ", t.title),
        None => " no track ".to_string(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_alignment(Alignment::Center);
    frame.render_widget(block, areas.player);

    let track_color = if hover { Color::Gray } else { Color::DarkGray };
    let arc = arc_points(RING_RADIUS, state.progress());
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-CANVAS_BOUND, CANVAS_BOUND])
        .y_bounds([-CANVAS_BOUND, CANVAS_BOUND])
        .paint(|ctx| {
            if let Some(effects) = effects {
                super::effects::paint(ctx, effects);
                ctx.layer();
            }
            ctx.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius: RING_RADIUS,
                color: track_color,
            });
            ctx.layer();
            ctx.draw(&Points {
                coords: &arc,
                color: Color::Cyan,
            });
        });
    frame.render_widget(canvas, areas.ring);

    // Centre readout over the canvas.
    if areas.ring.height >= 3 {
        let centre = Rect {
            x: areas.ring.x,
            y: areas.ring.y + areas.ring.height / 2 - 1,
            width: areas.ring.width,
            height: 2,
        };
        let status = if state.playing { "playing" } else { "paused" };
        let readout = Paragraph::new(vec![
            Line::from(format_time(state.current_time)).bold(),
            Line::from(status).dark_gray(),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(readout, centre);
    }

    let time = Paragraph::new(format!(
        "{} / {}",
        format_time(state.current_time),
        format_time(state.duration)
    ))
    .dark_gray();
    frame.render_widget(time, areas.time);

    let play_label = if state.playing { "[⏸ pause]" } else { "[▶ play]" };
    let button = |label: &str, style: Style| Paragraph::new(label.to_string()).style(style);
    let plain = Style::default();
    let primary = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    frame.render_widget(button("[⏮ prev]", plain), areas.prev);
    frame.render_widget(button(play_label, primary), areas.play);
    frame.render_widget(button("[⏭ next]", plain), areas.next);
    frame.render_widget(button("[■ stop]", Style::default().fg(Color::Red)), areas.stop);
}
