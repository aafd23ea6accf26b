//! Application model types: `App`, `DropZone` and the input vocabulary.

use std::time::Instant;

use tracing::{debug, info};

use crate::config::ControlsSettings;
use crate::effects::VisualEffects;
use crate::library::{Track, parse_dropped_paths, track_from_paths};
use crate::player::{MediaElement, PlaybackController};
use crate::ui::Hit;

/// Something the user asked for, independent of how it was triggered.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Action {
    PlayPause,
    Stop,
    Next,
    Previous,
    VolumeUp,
    VolumeDown,
    ToggleMute,
    ToggleShuffle,
    CycleRepeat,
    ScrubBack,
    ScrubForward,
    OpenPicker,
    Quit,
}

/// Edits applied to the path prompt while it has focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptEdit {
    Insert(char),
    Backspace,
    Submit,
    Cancel,
}

/// Drop/picker overlay state.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DropZone {
    /// Drag state: whether the overlay is showing.
    pub active: bool,
    /// Path typed into the prompt.
    pub input: String,
}

impl DropZone {
    pub fn open(&mut self) {
        self.active = true;
        self.input.clear();
    }

    pub fn close(&mut self) {
        self.active = false;
        self.input.clear();
    }
}

/// The main application model.
pub struct App<M: MediaElement> {
    pub controller: PlaybackController<M>,
    pub drop_zone: DropZone,
    pub effects: VisualEffects,
    /// Pointer is over the ring.
    pub ring_hover: bool,
    /// Where the startup playlist came from, shown in the header.
    pub origin: String,
    pub should_quit: bool,
    volume_step: i32,
    scrub_seconds: f64,
}

impl<M: MediaElement> App<M> {
    pub fn new(
        controller: PlaybackController<M>,
        effects: VisualEffects,
        controls: &ControlsSettings,
    ) -> Self {
        Self {
            controller,
            drop_zone: DropZone::default(),
            effects,
            ring_hover: false,
            origin: String::new(),
            should_quit: false,
            volume_step: i32::from(controls.volume_step),
            scrub_seconds: controls.scrub_seconds as f64,
        }
    }

    pub fn set_origin(&mut self, origin: impl Into<String>) {
        self.origin = origin.into();
    }

    pub fn apply(&mut self, action: Action) {
        let c = &mut self.controller;
        match action {
            Action::PlayPause => c.play_pause(),
            Action::Stop => c.stop(),
            Action::Next => c.next(),
            Action::Previous => c.previous(),
            Action::VolumeUp => c.adjust_volume(self.volume_step),
            Action::VolumeDown => c.adjust_volume(-self.volume_step),
            Action::ToggleMute => c.toggle_mute(),
            Action::ToggleShuffle => c.toggle_shuffle(),
            Action::CycleRepeat => c.cycle_repeat(),
            Action::ScrubBack => c.seek_by(-self.scrub_seconds),
            Action::ScrubForward => c.seek_by(self.scrub_seconds),
            Action::OpenPicker => self.drop_zone.open(),
            Action::Quit => self.should_quit = true,
        }
    }

    pub fn edit_prompt(&mut self, edit: PromptEdit) {
        match edit {
            PromptEdit::Insert(ch) => self.drop_zone.input.push(ch),
            PromptEdit::Backspace => {
                self.drop_zone.input.pop();
            }
            PromptEdit::Submit => {
                let input = std::mem::take(&mut self.drop_zone.input);
                self.drop_text(&input);
            }
            PromptEdit::Cancel => self.drop_zone.close(),
        }
    }

    /// Handle dropped or typed paths. Uses the first audio file; anything
    /// else is ignored. Returns whether a track was loaded.
    pub fn drop_text(&mut self, text: &str) -> bool {
        self.drop_zone.close();
        let paths = parse_dropped_paths(text);
        match track_from_paths(&paths) {
            Some(track) => {
                self.load_dropped(track);
                true
            }
            None => {
                debug!(candidates = paths.len(), "drop had no playable audio file");
                false
            }
        }
    }

    fn load_dropped(&mut self, track: Track) {
        info!(title = %track.title, format = %track.format, "dropped file loaded");
        self.controller.load_track(track);
    }

    /// Handle a pointer click on a layout element.
    pub fn click(&mut self, hit: Hit) {
        let duration = self.controller.state().duration;
        match hit {
            Hit::Ring { fraction } | Hit::Progress { fraction } => {
                // Seek gestures need a known duration.
                if duration > 0.0 {
                    self.controller.seek(fraction * duration);
                }
            }
            Hit::Volume { fraction } => {
                self.controller.set_volume((fraction * 100.0).round() as i32);
            }
            Hit::Previous => self.controller.previous(),
            Hit::PlayPause => self.controller.play_pause(),
            Hit::Next => self.controller.next(),
            Hit::Stop => self.controller.stop(),
            Hit::Mute => self.controller.toggle_mute(),
            Hit::Shuffle => self.controller.toggle_shuffle(),
            Hit::Repeat => self.controller.cycle_repeat(),
            Hit::DropZone => self.drop_zone.open(),
        }
    }

    /// Pointer moved; only the ring reacts to hovering.
    pub fn hover(&mut self, hit: Option<Hit>) {
        self.ring_hover = matches!(hit, Some(Hit::Ring { .. }));
    }

    /// Per-frame work: pending resumes and the effects field.
    pub fn frame(&mut self, now: Instant) {
        self.controller.tick(now);
        let state = self.controller.state();
        self.effects.step(state.playing, state.current_time);
    }
}
