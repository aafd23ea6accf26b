use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

use crate::config::AudioSettings;
use crate::library::TrackSource;
use crate::player::{MediaElement, MediaError, MediaEvent};

use super::thread::spawn_audio_thread;
use super::types::AudioCmd;

/// `MediaElement` backed by the audio thread.
pub struct RodioElement {
    tx: Sender<AudioCmd>,
    has_source: bool,
    join: Option<JoinHandle<()>>,
}

impl RodioElement {
    /// Start the audio thread. Media events arrive on the returned receiver.
    pub fn spawn(audio_settings: AudioSettings) -> (Self, Receiver<MediaEvent>) {
        let (tx, rx) = mpsc::channel::<AudioCmd>();
        let (event_tx, event_rx) = mpsc::channel::<MediaEvent>();
        let audio_handle = spawn_audio_thread(rx, event_tx, audio_settings);

        let element = Self {
            tx,
            has_source: false,
            join: Some(audio_handle),
        };
        (element, event_rx)
    }

    fn send(&self, cmd: AudioCmd) -> Result<(), MediaError> {
        self.tx.send(cmd).map_err(|_| MediaError::Disconnected)
    }

    /// Fade out, stop the thread and wait for it.
    pub fn quit_softly(&mut self, fade_out: Duration) {
        let _ = self.send(AudioCmd::Quit {
            fade_out_ms: fade_out.as_millis() as u64,
        });

        if let Some(h) = self.join.take() {
            let _ = h.join();
        }
    }
}

impl MediaElement for RodioElement {
    fn set_source(&mut self, source: &TrackSource) {
        self.has_source = !source.is_none();
        let _ = self.send(AudioCmd::SetSource(source.clone()));
    }

    fn load(&mut self) {
        let _ = self.send(AudioCmd::Load);
    }

    fn play(&mut self) -> Result<(), MediaError> {
        if !self.has_source {
            return Err(MediaError::NoSource);
        }
        self.send(AudioCmd::Play)
    }

    fn pause(&mut self) {
        let _ = self.send(AudioCmd::Pause);
    }

    fn set_current_time(&mut self, seconds: f64) {
        let _ = self.send(AudioCmd::SetCurrentTime(seconds));
    }

    fn set_volume(&mut self, volume: f32) {
        let _ = self.send(AudioCmd::SetVolume(volume));
    }
}
