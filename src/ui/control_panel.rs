use ratatui::{
    Frame,
    style::{Color, Modifier, Style, Stylize},
    widgets::{Block, Borders, Paragraph},
};

use super::bar_line;
use super::layout::Areas;
use crate::player::{PlaybackState, RepeatMode};

fn volume_icon(state: &PlaybackState) -> &'static str {
    if state.muted || state.volume == 0 {
        "[🔇]"
    } else if state.volume > 50 {
        "[🔊]"
    } else {
        "[🔉]"
    }
}

fn toggle_style(on: bool) -> Style {
    if on {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

pub fn render(frame: &mut Frame, areas: &Areas, state: &PlaybackState) {
    frame.render_widget(
        Block::default().borders(Borders::ALL).title(" controls "),
        areas.controls,
    );

    // Muted shows as zero without losing the stored volume.
    let shown = if state.muted { 0 } else { state.volume };

    frame.render_widget(Paragraph::new(volume_icon(state)), areas.mute);
    frame.render_widget(
        Paragraph::new(bar_line(
            areas.volume.width,
            f64::from(shown) / 100.0,
            Color::Magenta,
        )),
        areas.volume,
    );
    frame.render_widget(
        Paragraph::new(format!("{shown:>4}")).dark_gray(),
        areas.volume_label,
    );

    let shuffle = if state.shuffle { "[⤮ shuffle]" } else { "[  shuffle]" };
    frame.render_widget(
        Paragraph::new(shuffle).style(toggle_style(state.shuffle)),
        areas.shuffle,
    );
    frame.render_widget(
        Paragraph::new(format!("[⟳ repeat {}]", state.repeat.label()))
            .style(toggle_style(state.repeat != RepeatMode::Off)),
        areas.repeat,
    );
    frame.render_widget(Paragraph::new("[+ open file]").gray(), areas.open);
}
