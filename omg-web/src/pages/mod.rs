//! Pages of the app.

pub mod add_playlist;
pub mod layout;
pub mod login;
pub mod not_found;
pub mod playlist_detail;
pub mod playlists;

pub use add_playlist::AddPlaylist;
pub use layout::AppShell;
pub use login::Login;
pub use not_found::PageNotFound;
pub use playlist_detail::PlaylistDetail;
pub use playlists::Playlists;

use crate::store;
use dioxus::prelude::spawn;
use omg_ui::stores::{ModalRequest, ToastSeverity};

/// Kick off a sync for a playlist and toast the outcome.
pub(crate) fn sync_with_toast(id: i64) {
    spawn(async move {
        if store::playlists::sync_playlist(id).await {
            store::ui::show_toast("Playlist synchronized", ToastSeverity::Success);
        } else {
            let message = store::PLAYLISTS()
                .error
                .unwrap_or_else(|| "Sync failed".to_string());
            store::ui::show_toast(message, ToastSeverity::Error);
        }
    });
}

/// Generate (or rotate) the public token and open the share dialog.
pub(crate) fn open_public_link(id: i64) {
    spawn(async move {
        match store::playlists::generate_public_link(id).await {
            Some(link) => store::ui::push_modal(ModalRequest::PublicLink { link }),
            None => {
                let message = store::PLAYLISTS()
                    .error
                    .unwrap_or_else(|| "Failed to generate the public link".to_string());
                store::ui::show_toast(message, ToastSeverity::Error);
            }
        }
    });
}
