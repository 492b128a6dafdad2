//! Playlist collection state slice.

use omg_common::Playlist;
use std::collections::HashMap;
use tracing::debug;

/// Per-operation loading flags, tracked independently so a slow sync never
/// shows a spinner on the list view and vice versa.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadingFlags {
    pub list: bool,
    pub save: bool,
    pub delete: bool,
    pub sync: bool,
}

/// Sync lifecycle for a single playlist. Terminal states are advisory and
/// stay until the next sync of the same playlist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SyncStatus {
    #[default]
    Idle,
    Syncing,
    Success,
    Error,
}

/// Playlists slice: the cached collection plus the playlist open in the
/// detail view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlaylistsState {
    pub items: Vec<Playlist>,
    pub current: Option<Playlist>,
    pub loading: LoadingFlags,
    pub error: Option<String>,
    sync_status: HashMap<i64, SyncStatus>,
}

impl PlaylistsState {
    pub fn begin_list_load(&mut self) {
        self.loading.list = true;
        self.error = None;
    }

    pub fn list_loaded(&mut self, items: Vec<Playlist>) {
        debug!(count = items.len(), "playlist list loaded");
        self.items = items;
        self.loading.list = false;
    }

    /// Failure keeps whatever was already loaded.
    pub fn list_load_failed(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.loading.list = false;
    }

    pub fn current_loaded(&mut self, playlist: Playlist) {
        self.current = Some(playlist);
        self.loading.list = false;
    }

    pub fn begin_save(&mut self) {
        self.loading.save = true;
        self.error = None;
    }

    /// A freshly created playlist joins the cached collection.
    pub fn created(&mut self, playlist: Playlist) {
        self.items.push(playlist);
        self.loading.save = false;
    }

    /// Reconcile the one affected entry and the current pointer from the
    /// server's updated entity, without touching any loading flag.
    pub fn reconciled(&mut self, playlist: Playlist) {
        if let Some(existing) = self.items.iter_mut().find(|p| p.id == playlist.id) {
            *existing = playlist.clone();
        }
        if self.current.as_ref().is_some_and(|c| c.id == playlist.id) {
            self.current = Some(playlist);
        }
    }

    /// A save round-trip came back with the updated entity.
    pub fn updated(&mut self, playlist: Playlist) {
        self.reconciled(playlist);
        self.loading.save = false;
    }

    pub fn save_failed(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.loading.save = false;
    }

    pub fn begin_delete(&mut self) {
        self.loading.delete = true;
    }

    /// Removing the playlist open in the detail view also clears the
    /// current pointer; removing any other leaves it alone.
    pub fn removed(&mut self, id: i64) {
        self.items.retain(|p| p.id != id);
        if self.current.as_ref().is_some_and(|c| c.id == id) {
            self.current = None;
        }
        self.sync_status.remove(&id);
        self.loading.delete = false;
    }

    pub fn delete_failed(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.loading.delete = false;
    }

    pub fn sync_started(&mut self, id: i64) {
        debug!(playlist_id = id, "sync started");
        self.loading.sync = true;
        self.sync_status.insert(id, SyncStatus::Syncing);
    }

    pub fn sync_finished(&mut self, id: i64, ok: bool) {
        self.loading.sync = false;
        self.sync_status.insert(
            id,
            if ok { SyncStatus::Success } else { SyncStatus::Error },
        );
    }

    pub fn sync_status(&self, id: i64) -> SyncStatus {
        self.sync_status.get(&id).copied().unwrap_or_default()
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Drop the cached detail copy when navigating away.
    pub fn clear_current(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playlist(id: i64, name: &str) -> Playlist {
        serde_json::from_str(&format!(
            r#"{{
                "id": {id},
                "user_id": 1,
                "name": "{name}",
                "is_custom": false,
                "created_at": null
            }}"#
        ))
        .unwrap()
    }

    #[test]
    fn test_list_load_failure_keeps_items() {
        let mut state = PlaylistsState::default();
        state.list_loaded(vec![playlist(1, "Main")]);

        state.begin_list_load();
        state.list_load_failed("Failed to load playlists");

        assert_eq!(state.items.len(), 1);
        assert!(!state.loading.list);
        assert_eq!(state.error.as_deref(), Some("Failed to load playlists"));
    }

    #[test]
    fn test_removing_current_playlist_clears_pointer() {
        let mut state = PlaylistsState::default();
        state.list_loaded(vec![playlist(1, "Main"), playlist(2, "Sports")]);
        state.current_loaded(playlist(2, "Sports"));

        state.removed(2);

        assert!(state.current.is_none());
        assert_eq!(state.items.len(), 1);
    }

    #[test]
    fn test_removing_other_playlist_keeps_pointer() {
        let mut state = PlaylistsState::default();
        state.list_loaded(vec![playlist(1, "Main"), playlist(2, "Sports")]);
        state.current_loaded(playlist(2, "Sports"));

        state.removed(1);

        assert_eq!(state.current.as_ref().unwrap().id, 2);
    }

    #[test]
    fn test_updated_reconciles_items_and_current() {
        let mut state = PlaylistsState::default();
        state.list_loaded(vec![playlist(1, "Main")]);
        state.current_loaded(playlist(1, "Main"));

        state.updated(playlist(1, "Renamed"));

        assert_eq!(state.items[0].name, "Renamed");
        assert_eq!(state.current.as_ref().unwrap().name, "Renamed");
    }

    #[test]
    fn test_updated_leaves_unrelated_current_alone() {
        let mut state = PlaylistsState::default();
        state.list_loaded(vec![playlist(1, "Main"), playlist(2, "Sports")]);
        state.current_loaded(playlist(2, "Sports"));

        state.updated(playlist(1, "Renamed"));

        assert_eq!(state.current.as_ref().unwrap().name, "Sports");
    }

    #[test]
    fn test_sync_status_tracked_per_playlist() {
        let mut state = PlaylistsState::default();
        state.sync_started(1);
        state.sync_started(2);
        state.sync_finished(1, true);
        state.sync_finished(2, false);

        assert_eq!(state.sync_status(1), SyncStatus::Success);
        assert_eq!(state.sync_status(2), SyncStatus::Error);
        assert_eq!(state.sync_status(3), SyncStatus::Idle);
    }

    #[test]
    fn test_loading_flags_are_independent() {
        let mut state = PlaylistsState::default();
        state.begin_list_load();
        state.begin_save();
        state.sync_started(1);

        state.list_loaded(vec![]);

        assert!(!state.loading.list);
        assert!(state.loading.save);
        assert!(state.loading.sync);
    }
}
