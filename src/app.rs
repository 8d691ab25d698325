//! Application module: the playback controller driven by the window.
//!
//! The `App` model lives in `app::model` and holds the catalog, selection
//! and playback state.

mod model;

pub use model::*;
