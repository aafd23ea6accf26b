use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;
use crate::config::Settings;
use crate::effects::VisualEffects;
use crate::library::{TrackSource, mock_playlist};
use crate::player::{MediaElement, MediaError, PlaybackController};
use crate::ui::Hit;

#[derive(Default)]
struct SpyMedia {
    sources: Vec<TrackSource>,
    plays: usize,
}

impl MediaElement for SpyMedia {
    fn set_source(&mut self, source: &TrackSource) {
        self.sources.push(source.clone());
    }
    fn load(&mut self) {}
    fn play(&mut self) -> Result<(), MediaError> {
        self.plays += 1;
        Ok(())
    }
    fn pause(&mut self) {}
    fn set_current_time(&mut self, _seconds: f64) {}
    fn set_volume(&mut self, _volume: f32) {}
}

fn app_with(settings: &Settings) -> App<SpyMedia> {
    let controller = PlaybackController::with_rng(
        SpyMedia::default(),
        mock_playlist(),
        settings,
        StdRng::seed_from_u64(11),
    );
    let effects = VisualEffects::with_rng(5, StdRng::seed_from_u64(12));
    App::new(controller, effects, &settings.controls)
}

fn app() -> App<SpyMedia> {
    app_with(&Settings::default())
}

#[test]
fn arrow_volume_steps_clamp() {
    let mut app = app();
    app.apply(Action::VolumeUp);
    assert_eq!(app.controller.state().volume, 80);
    for _ in 0..10 {
        app.apply(Action::VolumeUp);
    }
    assert_eq!(app.controller.state().volume, 100);
    for _ in 0..30 {
        app.apply(Action::VolumeDown);
    }
    assert_eq!(app.controller.state().volume, 0);
}

#[test]
fn volume_step_comes_from_settings() {
    let mut settings = Settings::default();
    settings.controls.volume_step = 10;
    let mut app = app_with(&settings);
    app.apply(Action::VolumeDown);
    assert_eq!(app.controller.state().volume, 65);
}

#[test]
fn transport_actions_reach_controller() {
    let mut app = app();
    app.apply(Action::Next);
    assert_eq!(app.controller.current_index(), 1);
    app.apply(Action::Previous);
    app.apply(Action::Previous);
    assert_eq!(app.controller.current_index(), 2);

    app.apply(Action::PlayPause);
    assert!(app.controller.state().playing);
    app.apply(Action::Stop);
    assert!(!app.controller.state().playing);

    app.apply(Action::ToggleShuffle);
    assert!(app.controller.state().shuffle);
    app.apply(Action::CycleRepeat);
    assert_eq!(app.controller.state().repeat, crate::player::RepeatMode::All);
    app.apply(Action::ToggleMute);
    assert!(app.controller.state().muted);
}

#[test]
fn scrub_moves_by_configured_seconds() {
    let mut app = app();
    app.apply(Action::ScrubForward);
    app.apply(Action::ScrubForward);
    assert_eq!(app.controller.state().current_time, 10.0);
    app.apply(Action::ScrubBack);
    assert_eq!(app.controller.state().current_time, 5.0);
}

#[test]
fn quit_sets_flag() {
    let mut app = app();
    assert!(!app.should_quit);
    app.apply(Action::Quit);
    assert!(app.should_quit);
}

#[test]
fn picker_prompt_loads_typed_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("song.mp3");
    std::fs::write(&path, b"").unwrap();

    let mut app = app();
    app.apply(Action::OpenPicker);
    assert!(app.drop_zone.active);
    for ch in path.to_string_lossy().chars() {
        app.edit_prompt(PromptEdit::Insert(ch));
    }
    app.edit_prompt(PromptEdit::Insert('x'));
    app.edit_prompt(PromptEdit::Backspace);
    app.edit_prompt(PromptEdit::Submit);

    assert!(!app.drop_zone.active);
    let track = app.controller.current_track().unwrap();
    assert_eq!(track.title, "song");
    assert_eq!(track.format, "MPEG");
    assert_eq!(track.duration, 0.0);
    assert_eq!(track.source, TrackSource::File(path));
    assert_eq!(app.controller.current_index(), 0);
}

#[test]
fn cancel_closes_prompt_without_loading() {
    let mut app = app();
    app.apply(Action::OpenPicker);
    app.edit_prompt(PromptEdit::Insert('a'));
    app.edit_prompt(PromptEdit::Cancel);
    assert!(!app.drop_zone.active);
    assert!(app.drop_zone.input.is_empty());
    assert_eq!(
        app.controller.current_track().map(|t| t.title.as_str()),
        Some("Midnight Dreams")
    );
}

#[test]
fn drop_uses_first_audio_file_only() {
    let dir = tempfile::tempdir().unwrap();
    let notes = dir.path().join("notes.txt");
    let first = dir.path().join("first.flac");
    let second = dir.path().join("second.mp3");
    for p in [&notes, &first, &second] {
        std::fs::write(p, b"").unwrap();
    }

    let mut app = app();
    let text = format!(
        "{} {} {}",
        notes.display(),
        first.display(),
        second.display()
    );
    assert!(app.drop_text(&text));
    let track = app.controller.current_track().unwrap();
    assert_eq!(track.title, "first");
    assert_eq!(track.format, "FLAC");
}

#[test]
fn non_audio_drop_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let notes = dir.path().join("notes.txt");
    std::fs::write(&notes, b"").unwrap();

    let mut app = app();
    app.drop_zone.open();
    assert!(!app.drop_text(&notes.display().to_string()));
    assert!(!app.drop_zone.active);
    assert_eq!(app.controller.current_track().map(|t| t.id), Some(1));
}

#[test]
fn seek_clicks_need_known_duration() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fresh.wav");
    std::fs::write(&path, b"").unwrap();

    let mut app = app();
    app.click(Hit::Progress { fraction: 0.5 });
    assert_eq!(app.controller.state().current_time, 122.5);

    assert!(app.drop_text(&path.display().to_string()));
    app.click(Hit::Progress { fraction: 0.5 });
    app.click(Hit::Ring { fraction: 0.25 });
    assert_eq!(app.controller.state().current_time, 0.0);
}

#[test]
fn volume_click_sets_volume() {
    let mut app = app();
    app.controller.toggle_mute();
    app.click(Hit::Volume { fraction: 0.4 });
    assert_eq!(app.controller.state().volume, 40);
    assert!(!app.controller.state().muted);
}

#[test]
fn hover_only_tracks_ring() {
    let mut app = app();
    app.hover(Some(Hit::Ring { fraction: 0.1 }));
    assert!(app.ring_hover);
    app.hover(Some(Hit::Stop));
    assert!(!app.ring_hover);
    app.hover(None);
    assert!(!app.ring_hover);
}

#[test]
fn frame_fires_delayed_resume_and_steps_effects() {
    let mut app = app();
    app.apply(Action::PlayPause);
    app.apply(Action::Next);
    let plays = app.controller.media().plays;

    app.frame(Instant::now() + Duration::from_secs(5));
    assert_eq!(app.controller.media().plays, plays + 1);
    assert!(app.effects.is_active());
}
