use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use super::fetch::Fetched;
use super::sink::{SourceBytes, probe_duration, read_source, secs_to_duration};
use super::thread::{Backend, elapsed_secs, run_backend};
use super::types::{AudioCmd, AudioError};
use crate::library::TrackSource;
use crate::player::MediaEvent;

#[test]
fn elapsed_adds_seek_offset() {
    let offset = Duration::from_secs(30);
    let pos = Duration::from_millis(1500);
    assert_eq!(elapsed_secs(offset, pos), 31.5);
}

#[test]
fn negative_or_nan_seconds_become_zero() {
    assert_eq!(secs_to_duration(-4.0), Duration::ZERO);
    assert_eq!(secs_to_duration(f64::NAN), Duration::ZERO);
    assert_eq!(secs_to_duration(2.5), Duration::from_millis(2500));
}

#[test]
fn empty_source_reads_nothing() {
    assert!(read_source(&TrackSource::None).unwrap().is_none());
}

#[test]
fn file_source_is_read_whole() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clip.mp3");
    std::fs::write(&path, b"not really audio").unwrap();

    let data = read_source(&TrackSource::File(path)).unwrap().unwrap();
    assert_eq!(&data[..], b"not really audio");
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_source(&TrackSource::File(dir.path().join("gone.mp3"))).unwrap_err();
    assert!(matches!(err, AudioError::Read { .. }));
}

#[test]
fn garbage_has_no_probed_duration() {
    let data = SourceBytes::from(&b"definitely not a container"[..]);
    assert_eq!(probe_duration(&data), None);
}

#[test]
fn commands_are_served_while_a_download_hangs() {
    // Accepts connections into the backlog but never answers them.
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/preview.m4a", listener.local_addr().unwrap());

    let (events_tx, events_rx) = mpsc::channel();
    let (tx, rx) = mpsc::channel();
    let (done_tx, done_rx) = mpsc::channel();
    thread::spawn(move || {
        run_backend(Backend::new(None, events_tx), &rx, Duration::from_millis(5));
        let _ = done_tx.send(());
    });

    tx.send(AudioCmd::SetSource(TrackSource::Url(url))).unwrap();
    tx.send(AudioCmd::Load).unwrap();
    tx.send(AudioCmd::Pause).unwrap();
    tx.send(AudioCmd::SetCurrentTime(12.0)).unwrap();
    assert_eq!(
        events_rx.recv_timeout(Duration::from_secs(2)),
        Ok(MediaEvent::TimeUpdate(12.0))
    );

    tx.send(AudioCmd::Quit { fade_out_ms: 0 }).unwrap();
    assert!(done_rx.recv_timeout(Duration::from_secs(2)).is_ok());
    drop(listener);
}

#[test]
fn stale_downloads_are_ignored() {
    let (events_tx, events_rx) = mpsc::channel();
    let mut backend = Backend::new(None, events_tx);

    backend.handle(AudioCmd::SetSource(TrackSource::Url(
        "http://127.0.0.1:9/first.m4a".into(),
    )));
    backend.handle(AudioCmd::Load);
    backend.handle(AudioCmd::SetSource(TrackSource::Url(
        "http://127.0.0.1:9/second.m4a".into(),
    )));
    backend.handle(AudioCmd::Load);

    backend.handle_fetched(Fetched {
        generation: 1,
        result: Ok(Some(SourceBytes::from(&b"first"[..]))),
    });
    assert!(events_rx.try_recv().is_err());

    backend.handle_fetched(Fetched {
        generation: 2,
        result: Ok(Some(SourceBytes::from(&b"second"[..]))),
    });
    assert_eq!(events_rx.try_recv(), Ok(MediaEvent::TimeUpdate(0.0)));
}

#[test]
fn failed_download_clears_the_pending_load() {
    let (events_tx, events_rx) = mpsc::channel();
    let mut backend = Backend::new(None, events_tx);
    backend.handle(AudioCmd::SetSource(TrackSource::Url(
        "http://127.0.0.1:9/gone.m4a".into(),
    )));
    backend.handle(AudioCmd::Load);

    let err = read_source(&TrackSource::Url("http://127.0.0.1:9/gone.m4a".into())).unwrap_err();
    backend.handle_fetched(Fetched {
        generation: 1,
        result: Err(err),
    });
    backend.handle_fetched(Fetched {
        generation: 1,
        result: Ok(Some(SourceBytes::from(&b"late"[..]))),
    });
    assert!(events_rx.try_recv().is_err());
}
