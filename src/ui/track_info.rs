use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout},
    style::{Color, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::layout::Areas;
use super::{bar_line, format_time};
use crate::library::{Track, UNKNOWN_ALBUM, UNKNOWN_ARTIST, UNKNOWN_GENRE};
use crate::player::PlaybackState;

pub fn render(frame: &mut Frame, areas: &Areas, state: &PlaybackState, track: Option<&Track>) {
    frame.render_widget(
        Block::default().borders(Borders::ALL).title(" track "),
        areas.info,
    );

    let (title, artist, album) = match track {
        Some(t) => (t.title.as_str(), t.artist.as_str(), t.album.as_str()),
        None => ("No Track Selected", UNKNOWN_ARTIST, UNKNOWN_ALBUM),
    };
    let heading = Paragraph::new(vec![
        Line::from(title).bold(),
        Line::from(artist).gray(),
        Line::from(album).dark_gray(),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(heading, areas.heading);

    let progress = bar_line(areas.progress.width, state.progress(), Color::Cyan);
    frame.render_widget(Paragraph::new(progress), areas.progress);

    let [elapsed, total] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(areas.progress_times);
    frame.render_widget(
        Paragraph::new(format_time(state.current_time)).dark_gray(),
        elapsed,
    );
    frame.render_widget(
        Paragraph::new(format_time(state.duration))
            .dark_gray()
            .alignment(Alignment::Right),
        total,
    );

    let Some(track) = track else {
        return;
    };
    let genre = if track.genre.is_empty() {
        UNKNOWN_GENRE
    } else {
        track.genre.as_str()
    };
    let cell = |label: &'static str, value: String| {
        Line::from(vec![
            Span::from(format!("{label:<9}")).dark_gray(),
            Span::from(value),
        ])
    };
    let meta = Paragraph::new(vec![
        cell("Genre", genre.to_string()),
        cell("Year", track.year.clone()),
        cell("Duration", format_time(state.duration)),
        cell("Format", track.format.clone()),
    ]);
    frame.render_widget(meta, areas.meta);
}
