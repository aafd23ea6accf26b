//! Remote sources are downloaded off the audio thread.
//!
//! Each `SetSource` starts a new generation. A worker only reports back when
//! its generation is still the latest; superseded downloads stop after the
//! response headers and never reach the backend.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use tracing::debug;

use super::sink::{SourceBytes, fetch_url};
use super::types::AudioError;

/// A finished download for source generation `generation`.
#[derive(Debug)]
pub(super) struct Fetched {
    pub generation: u64,
    pub result: Result<Option<SourceBytes>, AudioError>,
}

pub(super) struct Fetcher {
    latest: Arc<AtomicU64>,
    reply: Sender<Fetched>,
}

impl Fetcher {
    pub fn new() -> (Self, Receiver<Fetched>) {
        let (reply, results) = mpsc::channel();
        let fetcher = Self {
            latest: Arc::new(AtomicU64::new(0)),
            reply,
        };
        (fetcher, results)
    }

    /// Only results for `generation` are wanted from now on.
    pub fn supersede(&self, generation: u64) {
        self.latest.store(generation, Ordering::Release);
    }

    pub fn spawn(&self, url: String, generation: u64) {
        let latest = Arc::clone(&self.latest);
        let reply = self.reply.clone();
        thread::spawn(move || {
            let wanted = || latest.load(Ordering::Acquire) == generation;
            let result = fetch_url(&url, wanted);
            if !wanted() {
                debug!(%url, "dropping superseded download");
                return;
            }
            // The backend hanging up means the audio thread has quit.
            let _ = reply.send(Fetched { generation, result });
        });
    }
}
