//! Playlist sources: the track model, the demo playlist, local scanning and
//! dropped-file conversion.

mod drop;
mod mock;
mod model;
mod scan;

pub use drop::{parse_dropped_paths, track_from_paths};
pub use mock::mock_playlist;
pub use model::*;
pub use scan::scan;
