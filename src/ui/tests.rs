use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::TestBackend, layout::Rect};

use super::circular::arc_points;
use super::layout::{bar_fraction, ring_fraction, ring_point};
use super::*;
use crate::config::Settings;
use crate::effects::VisualEffects;
use crate::library::{TrackSource, mock_playlist};
use crate::player::{MediaError, PlaybackController};

struct NullMedia;

impl MediaElement for NullMedia {
    fn set_source(&mut self, _source: &TrackSource) {}
    fn load(&mut self) {}
    fn play(&mut self) -> Result<(), MediaError> {
        Ok(())
    }
    fn pause(&mut self) {}
    fn set_current_time(&mut self, _seconds: f64) {}
    fn set_volume(&mut self, _volume: f32) {}
}

fn app() -> App<NullMedia> {
    let settings = Settings::default();
    let controller = PlaybackController::with_rng(
        NullMedia,
        mock_playlist(),
        &settings,
        StdRng::seed_from_u64(3),
    );
    let effects = VisualEffects::with_rng(10, StdRng::seed_from_u64(4));
    App::new(controller, effects, &settings.controls)
}

fn render(app: &App<NullMedia>, width: u16, height: u16) -> String {
    let settings = Settings::default();
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|f| draw(f, app, &settings.ui, &settings.controls))
        .unwrap();
    let buffer = terminal.backend().buffer().clone();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

#[test]
fn format_time_is_minutes_and_padded_seconds() {
    assert_eq!(format_time(0.0), "0:00");
    assert_eq!(format_time(245.0), "4:05");
    assert_eq!(format_time(59.9), "0:59");
    assert_eq!(format_time(3600.0), "60:00");
    assert_eq!(format_time(f64::NAN), "0:00");
    assert_eq!(format_time(-2.0), "0:00");
}

#[test]
fn ring_angle_runs_clockwise_from_top() {
    assert!((ring_fraction(0.0, 100.0) - 0.0).abs() < 1e-9);
    assert!((ring_fraction(100.0, 0.0) - 0.25).abs() < 1e-9);
    assert!((ring_fraction(0.0, -100.0) - 0.5).abs() < 1e-9);
    assert!((ring_fraction(-100.0, 0.0) - 0.75).abs() < 1e-9);
}

#[test]
fn ring_point_maps_cells_to_canvas() {
    let ring = Rect::new(10, 5, 40, 20);
    let (dx, dy) = ring_point(ring, 10, 5);
    assert!(dx < -200.0 && dy > 200.0);
    let (dx, dy) = ring_point(ring, 49, 24);
    assert!(dx > 200.0 && dy < -200.0);
}

#[test]
fn bar_fraction_spans_both_ends() {
    let bar = Rect::new(4, 0, 21, 1);
    assert_eq!(bar_fraction(bar, 4), 0.0);
    assert_eq!(bar_fraction(bar, 14), 0.5);
    assert_eq!(bar_fraction(bar, 24), 1.0);
    assert_eq!(bar_fraction(Rect::new(0, 0, 1, 1), 0), 0.0);
}

#[test]
fn arc_covers_progress_share() {
    let empty = arc_points(120.0, 0.0);
    assert_eq!(empty.len(), 1);
    assert!((empty[0].1 - 120.0).abs() < 1e-9);

    let half = arc_points(120.0, 0.5);
    let last = half[half.len() - 1];
    assert!(last.0.abs() < 1e-6);
    assert!((last.1 + 120.0).abs() < 1e-6);
}

#[test]
fn hit_testing_finds_drawn_elements() {
    let areas = compute(Rect::new(0, 0, 120, 40));

    assert_eq!(areas.hit(areas.play.x, areas.play.y), Some(Hit::PlayPause));
    assert_eq!(areas.hit(areas.prev.x + 1, areas.prev.y), Some(Hit::Previous));
    assert_eq!(areas.hit(areas.stop.x, areas.stop.y), Some(Hit::Stop));
    assert_eq!(areas.hit(areas.mute.x, areas.mute.y), Some(Hit::Mute));
    assert_eq!(areas.hit(areas.repeat.x, areas.repeat.y), Some(Hit::Repeat));
    assert_eq!(areas.hit(areas.open.x, areas.open.y), Some(Hit::DropZone));
    assert_eq!(
        areas.hit(areas.volume.x + areas.volume.width - 1, areas.volume.y),
        Some(Hit::Volume { fraction: 1.0 })
    );
    assert_eq!(
        areas.hit(areas.progress.x, areas.progress.y),
        Some(Hit::Progress { fraction: 0.0 })
    );

    let top = areas.hit(areas.ring.x + areas.ring.width / 2, areas.ring.y + areas.ring.height / 4);
    match top {
        Some(Hit::Ring { fraction }) => assert!(fraction < 0.05),
        other => panic!("expected ring hit, got {other:?}"),
    }

    // Ring corners lie outside the disc.
    assert_eq!(areas.hit(areas.ring.x, areas.ring.y), None);
}

#[test]
fn ring_click_seeks_by_angle() {
    let mut app = app();
    let areas = compute(Rect::new(0, 0, 120, 40));
    let right = areas.ring.x + areas.ring.width * 3 / 4;
    let middle = areas.ring.y + areas.ring.height / 2;
    let Some(hit) = areas.hit(right, middle) else {
        panic!("right side of the ring should be clickable");
    };
    app.click(hit);
    let t = app.controller.state().current_time;
    // Roughly a quarter of 245 s.
    assert!((t - 61.25).abs() < 15.0, "seeked to {t}");
}

#[test]
fn controls_text_lists_configured_steps() {
    let text = controls_text(5, 10);
    assert!(text.starts_with("[space] play/pause"));
    assert!(text.contains("[↑/↓] volume +/-5"));
    assert!(text.contains("[H/L] scrub -/+10s"));
    assert!(text.ends_with("[q] quit"));
}

#[test]
fn dashboard_renders_current_track() {
    let app = app();
    let screen = render(&app, 120, 40);
    assert!(screen.contains("Midnight Dreams"));
    assert!(screen.contains("Luna Eclipse"));
    assert!(screen.contains("0:00 / 4:05"));
    assert!(screen.contains("[space] play/pause"));
    assert!(screen.contains("Repeat: off"));
    assert!(screen.contains("Track 1/3"));
    assert!(!screen.contains("drop your music here"));
}

#[test]
fn drop_zone_overlay_shows_typed_path() {
    let mut app = app();
    app.drop_zone.open();
    app.drop_zone.input.push_str("/tmp/a.mp3");
    let screen = render(&app, 120, 40);
    assert!(screen.contains("drop your music here"));
    assert!(screen.contains("> /tmp/a.mp3"));
}

#[test]
fn tiny_terminal_does_not_panic() {
    let app = app();
    render(&app, 20, 8);
}
