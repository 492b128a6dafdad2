//! Transient UI state slice (toast, modal stack, sidebar).

use omg_common::{Channel, PublicLink};
use tracing::debug;

/// How long a toast stays on screen before auto-dismissal.
pub const TOAST_DURATION_MS: u64 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastSeverity {
    Success,
    Error,
    Info,
    Warning,
}

/// A single toast. At most one is visible; a newer toast supersedes the
/// current one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub severity: ToastSeverity,
}

/// Descriptors for the dialogs the app can open. Only the top entry of the
/// stack is interactive.
#[derive(Clone, Debug, PartialEq)]
pub enum ModalRequest {
    ConfirmDeletePlaylist { id: i64, name: String },
    ConfirmDeleteChannel {
        id: i64,
        name: String,
        /// Custom playlists borrow channels; set to the playlist id to
        /// detach instead of deleting the channel itself.
        detach_from: Option<i64>,
    },
    AddChannel { playlist_id: i64 },
    EditChannel { channel: Channel },
    PickChannels { playlist_id: i64 },
    PublicLink { link: PublicLink },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarState {
    pub is_open: bool,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self { is_open: true }
    }
}

/// Transient UI slice.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    pub toast: Option<Toast>,
    pub modals: Vec<ModalRequest>,
    pub sidebar: SidebarState,
    next_toast_id: u64,
}

impl UiState {
    /// Show a toast, replacing any visible one (last write wins). Returns
    /// the toast id so the caller can schedule an id-guarded dismissal.
    pub fn show_toast(&mut self, message: impl Into<String>, severity: ToastSeverity) -> u64 {
        self.next_toast_id += 1;
        let id = self.next_toast_id;
        debug!(id, "showing toast");
        self.toast = Some(Toast {
            id,
            message: message.into(),
            severity,
        });
        id
    }

    /// Dismiss only the toast with the given id. A dismissal scheduled for
    /// a superseded toast must not clear its successor.
    pub fn dismiss_toast(&mut self, id: u64) {
        if self.toast.as_ref().is_some_and(|t| t.id == id) {
            self.toast = None;
        }
    }

    pub fn clear_toast(&mut self) {
        self.toast = None;
    }

    pub fn push_modal(&mut self, modal: ModalRequest) {
        self.modals.push(modal);
    }

    /// Close the top modal only; entries beneath stay open.
    pub fn close_modal(&mut self) -> Option<ModalRequest> {
        self.modals.pop()
    }

    pub fn top_modal(&self) -> Option<&ModalRequest> {
        self.modals.last()
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar.is_open = !self.sidebar.is_open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_toast_supersedes_old_one() {
        let mut state = UiState::default();
        let first = state.show_toast("saved", ToastSeverity::Success);
        let second = state.show_toast("sync failed", ToastSeverity::Error);

        assert_ne!(first, second);
        assert_eq!(state.toast.as_ref().unwrap().id, second);
        assert_eq!(state.toast.as_ref().unwrap().message, "sync failed");
    }

    #[test]
    fn test_stale_dismissal_does_not_clear_new_toast() {
        let mut state = UiState::default();
        let first = state.show_toast("saved", ToastSeverity::Success);
        let second = state.show_toast("sync failed", ToastSeverity::Error);

        state.dismiss_toast(first);
        assert_eq!(state.toast.as_ref().unwrap().id, second);

        state.dismiss_toast(second);
        assert!(state.toast.is_none());
    }

    #[test]
    fn test_modal_stack_closes_top_only() {
        let mut state = UiState::default();
        state.push_modal(ModalRequest::ConfirmDeletePlaylist {
            id: 1,
            name: "Main".to_string(),
        });
        state.push_modal(ModalRequest::AddChannel { playlist_id: 1 });

        state.close_modal();
        assert!(matches!(
            state.top_modal(),
            Some(ModalRequest::ConfirmDeletePlaylist { .. })
        ));

        state.close_modal();
        assert!(state.top_modal().is_none());
    }

    #[test]
    fn test_sidebar_starts_open_and_toggles() {
        let mut state = UiState::default();
        assert!(state.sidebar.is_open);
        state.toggle_sidebar();
        assert!(!state.sidebar.is_open);
    }
}
