//! Screen layout shared by rendering and pointer hit-testing.

use ratatui::layout::{Constraint, Flex, Layout, Margin, Rect};

/// Half-extent of the ring canvas in canvas units.
pub const CANVAS_BOUND: f64 = 220.0;
/// Radius of the progress ring in canvas units.
pub const RING_RADIUS: f64 = 120.0;
/// Clicks inside this radius count as ring clicks.
pub const DISC_RADIUS: f64 = 140.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Areas {
    pub header: Rect,
    pub player: Rect,
    /// Canvas holding the ring and the effects field.
    pub ring: Rect,
    pub time: Rect,
    pub prev: Rect,
    pub play: Rect,
    pub next: Rect,
    pub stop: Rect,
    pub info: Rect,
    pub heading: Rect,
    pub progress: Rect,
    pub progress_times: Rect,
    pub meta: Rect,
    pub controls: Rect,
    pub mute: Rect,
    pub volume: Rect,
    pub volume_label: Rect,
    pub shuffle: Rect,
    pub repeat: Rect,
    pub open: Rect,
    pub footer: Rect,
}

/// A clickable element under the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Hit {
    /// `fraction` is the clockwise angle from the top, as a share of a turn.
    Ring { fraction: f64 },
    /// `fraction` of the bar's width, left to right.
    Progress { fraction: f64 },
    Volume { fraction: f64 },
    Previous,
    PlayPause,
    Next,
    Stop,
    Mute,
    Shuffle,
    Repeat,
    DropZone,
}

pub fn compute(area: Rect) -> Areas {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(10),
        Constraint::Length(4),
    ])
    .areas(area);

    let [player, side] =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(body);

    let player_inner = player.inner(Margin::new(1, 1));
    let [ring_area, transport] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(player_inner);
    let ring = circle_rect(ring_area);
    let [time, prev, play, next, stop] = Layout::horizontal([
        Constraint::Length(13),
        Constraint::Length(8),
        Constraint::Length(10),
        Constraint::Length(8),
        Constraint::Length(8),
    ])
    .flex(Flex::Center)
    .areas(transport);

    let [info, controls] =
        Layout::vertical([Constraint::Min(8), Constraint::Length(4)]).areas(side);

    let info_inner = info.inner(Margin::new(2, 1));
    let [heading, _, progress, progress_times, _, meta] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(info_inner);

    let controls_inner = controls.inner(Margin::new(2, 1));
    let [volume_row, toggle_row] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(controls_inner);
    let [mute, volume, volume_label] = Layout::horizontal([
        Constraint::Length(6),
        Constraint::Min(4),
        Constraint::Length(5),
    ])
    .areas(volume_row);
    let [shuffle, repeat, open] = Layout::horizontal([
        Constraint::Length(15),
        Constraint::Length(15),
        Constraint::Min(0),
    ])
    .areas(toggle_row);

    Areas {
        header,
        player,
        ring,
        time,
        prev,
        play,
        next,
        stop,
        info,
        heading,
        progress,
        progress_times,
        meta,
        controls,
        mute,
        volume,
        volume_label,
        shuffle,
        repeat,
        open,
        footer,
    }
}

/// Largest centred rect that renders as a circle, assuming cells twice as
/// tall as they are wide.
fn circle_rect(area: Rect) -> Rect {
    let width = area.width.min(area.height.saturating_mul(2));
    let height = (width / 2).min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

impl Areas {
    /// Element at the given terminal cell, if any.
    pub fn hit(&self, column: u16, row: u16) -> Option<Hit> {
        let at = |r: Rect| contains(r, column, row);

        if at(self.ring) {
            let (dx, dy) = ring_point(self.ring, column, row);
            if dx.hypot(dy) <= DISC_RADIUS {
                return Some(Hit::Ring {
                    fraction: ring_fraction(dx, dy),
                });
            }
            return None;
        }
        if at(self.progress) {
            return Some(Hit::Progress {
                fraction: bar_fraction(self.progress, column),
            });
        }
        if at(self.volume) {
            return Some(Hit::Volume {
                fraction: bar_fraction(self.volume, column),
            });
        }

        [
            (self.prev, Hit::Previous),
            (self.play, Hit::PlayPause),
            (self.next, Hit::Next),
            (self.stop, Hit::Stop),
            (self.mute, Hit::Mute),
            (self.shuffle, Hit::Shuffle),
            (self.repeat, Hit::Repeat),
            (self.open, Hit::DropZone),
        ]
        .into_iter()
        .find(|(r, _)| at(*r))
        .map(|(_, hit)| hit)
    }
}

fn contains(r: Rect, column: u16, row: u16) -> bool {
    column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
}

/// Canvas coordinates (y up) of the centre of a cell inside `ring`.
pub fn ring_point(ring: Rect, column: u16, row: u16) -> (f64, f64) {
    let span = CANVAS_BOUND * 2.0;
    let fx = (f64::from(column.saturating_sub(ring.x)) + 0.5) / f64::from(ring.width.max(1));
    let fy = (f64::from(row.saturating_sub(ring.y)) + 0.5) / f64::from(ring.height.max(1));
    (fx * span - CANVAS_BOUND, CANVAS_BOUND - fy * span)
}

/// Clockwise angle from the top as a share of a full turn, in `0.0..1.0`.
pub fn ring_fraction(dx: f64, dy: f64) -> f64 {
    let degrees = dx.atan2(dy).to_degrees().rem_euclid(360.0);
    degrees / 360.0
}

/// Position of `column` along a bar, `0.0` at the left cell and `1.0` at the right.
pub fn bar_fraction(bar: Rect, column: u16) -> f64 {
    if bar.width <= 1 {
        return 0.0;
    }
    let offset = f64::from(column.saturating_sub(bar.x));
    (offset / f64::from(bar.width - 1)).clamp(0.0, 1.0)
}
