use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use crate::config::Settings;
use crate::library::Track;

use super::media::{MediaElement, MediaEvent};
use super::state::PlaybackState;

/// Transport state plus the playlist, driving a single media element.
pub struct PlaybackController<M: MediaElement> {
    media: M,
    playlist: Vec<Track>,
    current_index: usize,
    current_track: Option<Track>,
    state: PlaybackState,
    previous_volume: u8,
    rng: StdRng,
    resume_delay: Duration,
    /// Deadline for the delayed `play()` after a source swap.
    resume_at: Option<Instant>,
}

impl<M: MediaElement> PlaybackController<M> {
    pub fn new(media: M, playlist: Vec<Track>, settings: &Settings) -> Self {
        Self::with_rng(media, playlist, settings, StdRng::from_os_rng())
    }

    pub fn with_rng(media: M, playlist: Vec<Track>, settings: &Settings, rng: StdRng) -> Self {
        let volume = settings.audio.startup_volume.min(100);
        let state = PlaybackState {
            volume,
            shuffle: settings.playback.shuffle,
            repeat: settings.playback.repeat.into(),
            ..PlaybackState::default()
        };

        let mut controller = Self {
            media,
            playlist,
            current_index: 0,
            current_track: None,
            state,
            previous_volume: volume,
            rng,
            resume_delay: Duration::from_millis(settings.audio.resume_delay_ms),
            resume_at: None,
        };
        controller.sync_volume();
        if !controller.playlist.is_empty() {
            controller.install(0);
        }
        controller
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.current_track.as_ref()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn playlist(&self) -> &[Track] {
        &self.playlist
    }

    #[cfg(test)]
    pub fn media(&self) -> &M {
        &self.media
    }

    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    /// Whether a delayed resume is waiting to fire.
    pub fn resume_pending(&self) -> bool {
        self.resume_at.is_some()
    }

    pub fn play_pause(&mut self) {
        if self.state.playing {
            self.media.pause();
            self.resume_at = None;
        } else if let Err(e) = self.media.play() {
            warn!(error = %e, "playback did not start");
        }
        self.state.playing = !self.state.playing;
    }

    pub fn stop(&mut self) {
        self.media.pause();
        self.media.set_current_time(0.0);
        self.state.playing = false;
        self.state.current_time = 0.0;
        self.resume_at = None;
    }

    pub fn next(&mut self) {
        let Some(index) = self.pick_index(1) else {
            return;
        };
        self.switch_to(index);
    }

    pub fn previous(&mut self) {
        let Some(index) = self.pick_index(-1) else {
            return;
        };
        self.switch_to(index);
    }

    /// Jump to `seconds`. Not validated against the duration.
    pub fn seek(&mut self, seconds: f64) {
        self.media.set_current_time(seconds);
        self.state.current_time = seconds;
    }

    /// Seek relative to the current position, never before zero.
    pub fn seek_by(&mut self, delta_seconds: f64) {
        self.seek((self.state.current_time + delta_seconds).max(0.0));
    }

    pub fn set_volume(&mut self, volume: i32) {
        let volume = volume.clamp(0, 100) as u8;
        self.state.volume = volume;
        if volume > 0 && self.state.muted {
            self.state.muted = false;
        }
        self.sync_volume();
    }

    pub fn adjust_volume(&mut self, delta: i32) {
        self.state.volume = (i32::from(self.state.volume) + delta).clamp(0, 100) as u8;
        self.sync_volume();
    }

    pub fn toggle_mute(&mut self) {
        if self.state.muted {
            self.state.muted = false;
            self.state.volume = self.previous_volume;
        } else {
            self.previous_volume = self.state.volume;
            self.state.muted = true;
        }
        self.sync_volume();
    }

    pub fn toggle_shuffle(&mut self) {
        self.state.shuffle = !self.state.shuffle;
    }

    pub fn cycle_repeat(&mut self) {
        self.state.repeat = self.state.repeat.cycle();
    }

    /// Make `track` current without touching the playlist or its index.
    pub fn load_track(&mut self, track: Track) {
        debug!(title = %track.title, "loading dropped track");
        self.media.set_source(&track.source);
        self.media.load();
        self.state.current_time = 0.0;
        self.state.duration = track.duration;
        self.current_track = Some(track);
        self.schedule_resume();
    }

    /// Append tracks to the playlist; selects the first one if nothing was loaded.
    pub fn append_tracks(&mut self, tracks: Vec<Track>) {
        if tracks.is_empty() {
            return;
        }
        let was_empty = self.playlist.is_empty();
        self.playlist.extend(tracks);
        if was_empty && self.current_track.is_none() {
            self.install(0);
        }
    }

    /// Fire the delayed resume once its deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        let Some(at) = self.resume_at else {
            return;
        };
        if now < at {
            return;
        }
        self.resume_at = None;
        if self.state.playing {
            if let Err(e) = self.media.play() {
                warn!(error = %e, "playback did not resume");
            }
        }
    }

    pub fn handle_media_event(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::TimeUpdate(t) => self.state.current_time = t,
            MediaEvent::LoadedMetadata(d) => {
                self.state.duration = if d.is_finite() && d > 0.0 { d } else { 0.0 };
            }
            // Repeat mode is display-only; an ended track always advances.
            MediaEvent::Ended => self.next(),
        }
    }

    fn pick_index(&mut self, step: isize) -> Option<usize> {
        let len = self.playlist.len();
        if len == 0 {
            return None;
        }
        if self.state.shuffle {
            return Some(self.rng.random_range(0..len));
        }
        let len = len as isize;
        Some((self.current_index as isize + step).rem_euclid(len) as usize)
    }

    fn switch_to(&mut self, index: usize) {
        self.install(index);
        self.schedule_resume();
    }

    fn install(&mut self, index: usize) {
        let Some(track) = self.playlist.get(index).cloned() else {
            return;
        };
        self.current_index = index;
        self.media.set_source(&track.source);
        self.media.load();
        self.state.current_time = 0.0;
        self.state.duration = track.duration;
        self.current_track = Some(track);
    }

    fn schedule_resume(&mut self) {
        if self.state.playing {
            self.resume_at = Some(Instant::now() + self.resume_delay);
        }
    }

    fn sync_volume(&mut self) {
        let volume = self.state.effective_volume();
        self.media.set_volume(volume);
    }
}
