//! State slices for the app.
//!
//! Three independent slices — auth, playlists, transient UI — each a plain
//! struct with typed mutation methods. The web app holds them in signals and
//! mutates them only through these methods, so every slice owns its own
//! loading/error flags and unrelated operations never interfere.

pub mod auth;
pub mod playlists;
pub mod ui;

pub use auth::*;
pub use playlists::*;
pub use ui::*;
