use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::thread::JoinHandle;
use std::time::Duration;

use rodio::{OutputStream, OutputStreamBuilder, Sink};
use tracing::{debug, warn};

use crate::config::AudioSettings;
use crate::library::TrackSource;
use crate::player::MediaEvent;

use super::fetch::{Fetched, Fetcher};
use super::sink::{SourceBytes, create_sink_at, probe_duration, read_source, secs_to_duration};
use super::types::{AudioCmd, AudioError};

pub(super) fn spawn_audio_thread(
    rx: Receiver<AudioCmd>,
    events: Sender<MediaEvent>,
    audio_settings: AudioSettings,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let stream = match OutputStreamBuilder::open_default_stream() {
            Ok(mut stream) => {
                // rodio logs to stderr when OutputStream is dropped. That's useful in debugging,
                // but noisy for a TUI app.
                stream.log_on_drop(false);
                Some(stream)
            }
            Err(e) => {
                warn!(error = %AudioError::NoDevice(e.to_string()), "audio output unavailable");
                None
            }
        };

        let tick = Duration::from_millis(audio_settings.tick_ms.max(1));
        run_backend(Backend::new(stream, events), &rx, tick);
    })
}

/// Serve commands until `Quit` or until the sending side hangs up. Finished
/// downloads are picked up between commands and on every tick.
pub(super) fn run_backend(mut backend: Backend, rx: &Receiver<AudioCmd>, tick: Duration) {
    loop {
        match rx.recv_timeout(tick) {
            Ok(AudioCmd::Quit { fade_out_ms }) => {
                if let Some(ref s) = backend.sink {
                    // Fade out gently before stopping.
                    if !backend.paused {
                        fade_out_sink(s, backend.volume, fade_out_ms);
                    }
                    s.stop();
                }
                break;
            }
            Ok(cmd) => backend.handle(cmd),
            Err(RecvTimeoutError::Timeout) => backend.report_progress(),
            Err(RecvTimeoutError::Disconnected) => break,
        }
        backend.collect_fetches();
    }
}

pub(super) struct Backend {
    stream: Option<OutputStream>,
    events: Sender<MediaEvent>,
    source: TrackSource,
    /// Bumped on every `SetSource`; tags downloads.
    generation: u64,
    fetcher: Fetcher,
    fetched: Receiver<Fetched>,
    fetching: bool,
    /// A `Load` is waiting for the current download.
    load_pending: bool,
    data: Option<SourceBytes>,
    sink: Option<Sink>,
    /// Position the current sink started at.
    offset: Duration,
    paused: bool,
    volume: f32,
    ended_sent: bool,
}

impl Backend {
    pub fn new(stream: Option<OutputStream>, events: Sender<MediaEvent>) -> Self {
        let (fetcher, fetched) = Fetcher::new();
        Self {
            stream,
            events,
            source: TrackSource::None,
            generation: 0,
            fetcher,
            fetched,
            fetching: false,
            load_pending: false,
            data: None,
            sink: None,
            offset: Duration::ZERO,
            paused: true,
            volume: 1.0,
            ended_sent: false,
        }
    }

    pub fn handle(&mut self, cmd: AudioCmd) {
        match cmd {
            AudioCmd::SetSource(source) => {
                self.stop_sink();
                self.data = None;
                self.source = source;
                self.generation += 1;
                self.fetcher.supersede(self.generation);
                self.fetching = false;
                self.load_pending = false;
            }
            AudioCmd::Load => self.load(),
            AudioCmd::Play => {
                // Remembered while a download is pending.
                self.paused = false;
                if self.sink.is_none() && self.data.is_some() {
                    self.rebuild_at(self.offset);
                }
                if let Some(ref s) = self.sink {
                    s.play();
                }
            }
            AudioCmd::Pause => {
                if let Some(ref s) = self.sink {
                    s.pause();
                }
                self.paused = true;
            }
            AudioCmd::SetCurrentTime(seconds) => {
                let at = secs_to_duration(seconds);
                if self.data.is_some() {
                    // Scrubbing: rebuild the current sink and skip into the source.
                    self.rebuild_at(at);
                    if !self.paused {
                        if let Some(ref s) = self.sink {
                            s.play();
                        }
                    }
                }
                self.offset = at;
                self.emit(MediaEvent::TimeUpdate(at.as_secs_f64()));
            }
            AudioCmd::SetVolume(volume) => {
                self.volume = volume.clamp(0.0, 1.0);
                if let Some(ref s) = self.sink {
                    s.set_volume(self.volume);
                }
            }
            // Handled by the loop.
            AudioCmd::Quit { .. } => {}
        }
    }

    fn load(&mut self) {
        self.stop_sink();
        self.paused = true;
        self.offset = Duration::ZERO;

        if self.data.is_none() {
            if let TrackSource::Url(url) = &self.source {
                self.load_pending = true;
                if !self.fetching {
                    self.fetching = true;
                    self.fetcher.spawn(url.clone(), self.generation);
                }
                return;
            }
            match read_source(&self.source) {
                Ok(data) => self.data = data,
                Err(e) => {
                    warn!(error = %e, "could not load source");
                    return;
                }
            }
        }
        self.finish_load();
    }

    pub fn collect_fetches(&mut self) {
        while let Ok(fetched) = self.fetched.try_recv() {
            self.handle_fetched(fetched);
        }
    }

    pub fn handle_fetched(&mut self, fetched: Fetched) {
        if fetched.generation != self.generation {
            debug!(generation = fetched.generation, "ignoring stale download");
            return;
        }
        self.fetching = false;
        match fetched.result {
            Ok(data) => self.data = data,
            Err(e) => {
                warn!(error = %e, "could not load source");
                self.load_pending = false;
                return;
            }
        }
        if std::mem::take(&mut self.load_pending) {
            self.finish_load();
        }
    }

    /// Build the sink for loaded data and announce it. Seeks and `Play`
    /// received while the data was on its way are honoured.
    fn finish_load(&mut self) {
        let Some(data) = self.data.clone() else {
            return;
        };

        let total = self.rebuild_at(self.offset);
        if let Some(d) = total.or_else(|| probe_duration(&data)) {
            self.emit(MediaEvent::LoadedMetadata(d.as_secs_f64()));
        }
        self.emit(MediaEvent::TimeUpdate(self.offset.as_secs_f64()));
        if !self.paused {
            if let Some(ref s) = self.sink {
                s.play();
            }
        }
    }

    /// Replace the sink with a paused one starting at `at`.
    fn rebuild_at(&mut self, at: Duration) -> Option<Duration> {
        self.stop_sink();
        self.offset = at;
        self.ended_sent = false;

        let (Some(stream), Some(data)) = (self.stream.as_ref(), self.data.as_ref()) else {
            return None;
        };
        match create_sink_at(stream, data, at, self.volume) {
            Ok((sink, total)) => {
                self.sink = Some(sink);
                total
            }
            Err(e) => {
                warn!(error = %e, "could not decode source");
                None
            }
        }
    }

    fn report_progress(&mut self) {
        let Some(ref s) = self.sink else {
            return;
        };
        if self.paused {
            return;
        }
        if s.empty() {
            if !self.ended_sent {
                self.ended_sent = true;
                debug!("source ended");
                self.emit(MediaEvent::Ended);
            }
            return;
        }
        let elapsed = elapsed_secs(self.offset, s.get_pos());
        self.emit(MediaEvent::TimeUpdate(elapsed));
    }

    fn stop_sink(&mut self) {
        if let Some(s) = self.sink.take() {
            s.stop();
        }
    }

    fn emit(&self, event: MediaEvent) {
        // The UI side hanging up just means we're shutting down.
        let _ = self.events.send(event);
    }
}

/// Absolute position of a sink that started at `offset`.
pub(super) fn elapsed_secs(offset: Duration, sink_pos: Duration) -> f64 {
    (offset + sink_pos).as_secs_f64()
}

fn fade_out_sink(sink: &Sink, from: f32, fade_out_ms: u64) {
    if fade_out_ms == 0 {
        sink.set_volume(0.0);
        return;
    }
    let steps: u64 = 20;
    let step_ms = (fade_out_ms / steps).max(1);
    for step in 1..=steps {
        let t = step as f32 / steps as f32;
        sink.set_volume(from * (1.0 - t));
        thread::sleep(Duration::from_millis(step_ms));
    }
    sink.set_volume(0.0);
}
