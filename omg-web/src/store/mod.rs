//! Global state signals and the actions that mutate them.
//!
//! Each slice is owned by its signal and mutated only through the action
//! functions in its submodule. Actions catch their own failures and record
//! them as slice-scoped error strings instead of throwing.

pub mod auth;
pub mod playlists;
pub mod ui;

use dioxus::prelude::*;
use omg_ui::stores::{AuthState, PlaylistsState, UiState};

pub static AUTH: GlobalSignal<AuthState> = Signal::global(AuthState::default);
pub static PLAYLISTS: GlobalSignal<PlaylistsState> = Signal::global(PlaylistsState::default);
pub static UI: GlobalSignal<UiState> = Signal::global(UiState::default);
