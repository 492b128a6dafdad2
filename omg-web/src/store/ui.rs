//! UI slice actions.

use super::UI;
use dioxus::prelude::spawn;
use omg_ui::stores::{ModalRequest, ToastSeverity, TOAST_DURATION_MS};
use omg_ui::timers::sleep_ms;

/// Show a toast and schedule its auto-dismissal. The dismissal is bound to
/// this toast's id, so a superseding toast is never cleared by it.
pub fn show_toast(message: impl Into<String>, severity: ToastSeverity) {
    let id = UI.write().show_toast(message, severity);
    spawn(async move {
        sleep_ms(TOAST_DURATION_MS).await;
        UI.write().dismiss_toast(id);
    });
}

pub fn dismiss_toast(id: u64) {
    UI.write().dismiss_toast(id);
}

pub fn push_modal(modal: ModalRequest) {
    UI.write().push_modal(modal);
}

pub fn close_modal() {
    UI.write().close_modal();
}

pub fn toggle_sidebar() {
    UI.write().toggle_sidebar();
}
