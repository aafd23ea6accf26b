//! Remote track search.
//!
//! Tracks are fetched from an iTunes Search compatible endpoint. All
//! configured queries are issued together and joined; one failure drops the
//! whole batch and the playlist keeps only what it already had.

mod client;
mod dto;

use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};

use tracing::{debug, info};

use client::SearchClient;

use crate::config::SearchSettings;
use crate::library::Track;

/// Run the startup search on a background thread.
///
/// On success the combined tracks are sent on `tx`; on failure nothing is sent.
pub fn spawn_startup_search(settings: SearchSettings, tx: Sender<Vec<Track>>) -> JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(e) => {
                debug!(error = %e, "search runtime unavailable");
                return;
            }
        };

        let client = SearchClient::new(&settings);
        match runtime.block_on(client.search_all(&settings.queries)) {
            Ok(tracks) => {
                info!(count = tracks.len(), "remote search finished");
                let _ = tx.send(tracks);
            }
            Err(e) => debug!(error = %e, "remote search failed; keeping local playlist"),
        }
    })
}
