//! Playlists slice actions.
//!
//! Mutations whose response carries the updated entity reconcile the one
//! affected entry in place; operations that only acknowledge success reload
//! the affected playlist afterwards.

use super::PLAYLISTS;
use crate::api::client;
use dioxus::prelude::Readable;
use omg_common::{ChannelOrder, ChannelPatch, NewChannel, NewPlaylist, Playlist, PlaylistPatch, PublicLink};
use tracing::info;

pub async fn load_playlists() {
    PLAYLISTS.write().begin_list_load();
    match client().playlists().await {
        Ok(items) => PLAYLISTS.write().list_loaded(items),
        Err(err) => PLAYLISTS.write().list_load_failed(err.to_string()),
    }
}

pub async fn load_playlist(id: i64) {
    PLAYLISTS.write().begin_list_load();
    match client().playlist(id).await {
        Ok(playlist) => PLAYLISTS.write().current_loaded(playlist),
        Err(err) => PLAYLISTS.write().list_load_failed(err.to_string()),
    }
}

pub async fn create_playlist(new: NewPlaylist) -> Option<Playlist> {
    PLAYLISTS.write().begin_save();
    match client().create_playlist(&new).await {
        Ok(playlist) => {
            info!(playlist_id = playlist.id, "playlist created");
            PLAYLISTS.write().created(playlist.clone());
            Some(playlist)
        }
        Err(err) => {
            PLAYLISTS.write().save_failed(err.to_string());
            None
        }
    }
}

pub async fn update_playlist(id: i64, patch: PlaylistPatch) -> bool {
    PLAYLISTS.write().begin_save();
    match client().update_playlist(id, &patch).await {
        Ok(playlist) => {
            PLAYLISTS.write().updated(playlist);
            true
        }
        Err(err) => {
            PLAYLISTS.write().save_failed(err.to_string());
            false
        }
    }
}

pub async fn delete_playlist(id: i64) -> bool {
    PLAYLISTS.write().begin_delete();
    match client().delete_playlist(id).await {
        Ok(_) => {
            info!(playlist_id = id, "playlist deleted");
            PLAYLISTS.write().removed(id);
            true
        }
        Err(err) => {
            PLAYLISTS.write().delete_failed(err.to_string());
            false
        }
    }
}

/// Trigger a server-side sync, then pull the refreshed playlist so the
/// channel list and last-sync timestamp are current.
pub async fn sync_playlist(id: i64) -> bool {
    PLAYLISTS.write().sync_started(id);
    match client().sync_playlist(id).await {
        Ok(outcome) => {
            info!(playlist_id = id, channels = ?outcome.channels_count, "sync complete");
            if let Ok(fresh) = client().playlist(id).await {
                PLAYLISTS.write().reconciled(fresh);
            }
            PLAYLISTS.write().sync_finished(id, true);
            true
        }
        Err(err) => {
            PLAYLISTS.write().set_error(err.to_string());
            PLAYLISTS.write().sync_finished(id, false);
            false
        }
    }
}

pub async fn generate_public_link(id: i64) -> Option<PublicLink> {
    match client().generate_public_token(id).await {
        Ok(link) => Some(link),
        Err(err) => {
            PLAYLISTS.write().set_error(err.to_string());
            None
        }
    }
}

/// Reload the playlist currently open in the detail view, if any.
async fn reload_current() {
    let current_id = PLAYLISTS.read().current.as_ref().map(|p| p.id);
    if let Some(id) = current_id {
        load_playlist(id).await;
    }
}

pub async fn add_channel(playlist_id: i64, new: NewChannel) -> bool {
    match client().add_channel(playlist_id, &new).await {
        Ok(_) => {
            load_playlist(playlist_id).await;
            true
        }
        Err(err) => {
            PLAYLISTS.write().set_error(err.to_string());
            false
        }
    }
}

pub async fn update_channel(channel_id: i64, patch: ChannelPatch) -> bool {
    match client().update_channel(channel_id, &patch).await {
        Ok(_) => {
            reload_current().await;
            true
        }
        Err(err) => {
            PLAYLISTS.write().set_error(err.to_string());
            false
        }
    }
}

pub async fn delete_channel(channel_id: i64) -> bool {
    match client().delete_channel(channel_id).await {
        Ok(_) => {
            reload_current().await;
            true
        }
        Err(err) => {
            PLAYLISTS.write().set_error(err.to_string());
            false
        }
    }
}

pub async fn reorder_channels(playlist_id: i64, orders: Vec<ChannelOrder>) -> bool {
    match client().reorder_channels(playlist_id, &orders).await {
        Ok(_) => {
            load_playlist(playlist_id).await;
            true
        }
        Err(err) => {
            PLAYLISTS.write().set_error(err.to_string());
            false
        }
    }
}

pub async fn add_channel_to_custom(playlist_id: i64, channel_id: i64) -> bool {
    match client().add_channel_to_custom(playlist_id, channel_id).await {
        Ok(_) => {
            load_playlist(playlist_id).await;
            true
        }
        Err(err) => {
            PLAYLISTS.write().set_error(err.to_string());
            false
        }
    }
}

pub async fn remove_channel_from_custom(playlist_id: i64, channel_id: i64) -> bool {
    match client().remove_channel_from_custom(playlist_id, channel_id).await {
        Ok(_) => {
            load_playlist(playlist_id).await;
            true
        }
        Err(err) => {
            PLAYLISTS.write().set_error(err.to_string());
            false
        }
    }
}

pub fn clear_error() {
    PLAYLISTS.write().clear_error();
}

pub fn clear_current() {
    PLAYLISTS.write().clear_current();
}
