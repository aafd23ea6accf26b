use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap},
};

use super::centered_rect_sized;
use crate::app::DropZone;

pub fn render(frame: &mut Frame, area: Rect, drop_zone: &DropZone) {
    let popup = centered_rect_sized(64, 9, area);
    frame.render_widget(Clear, popup);

    let text = vec![
        Line::from("Drop an audio file onto this window,").centered(),
        Line::from("or type its path below.").centered(),
        Line::from(""),
        Line::from(format!("> {}▏", drop_zone.input)).cyan(),
        Line::from(""),
        Line::from("MP3 • WAV • FLAC • OGG • M4A    Enter: load • Esc: cancel")
            .dark_gray()
            .centered(),
    ];
    let popup_par = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" drop your music here ")
                .title_alignment(Alignment::Center)
                .padding(Padding {
                    left: 1,
                    right: 1,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(popup_par, popup);
}
