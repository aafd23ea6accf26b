//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the playback controller,
//! the drop zone and the effects field, and turns user input into
//! controller calls.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
