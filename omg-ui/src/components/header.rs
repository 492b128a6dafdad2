//! Top header bar view

use crate::components::icons::{LogOutIcon, MenuIcon, TvIcon};
use crate::components::IconButton;
use dioxus::prelude::*;

/// Header bar: sidebar toggle, app title, signed-in user, logout.
#[component]
pub fn HeaderView(
    #[props(default)] username: Option<String>,
    on_toggle_sidebar: EventHandler<()>,
    on_logout: EventHandler<()>,
) -> Element {
    rsx! {
        header { class: "flex items-center gap-3 px-4 py-3 bg-gray-800 border-b border-gray-700",
            IconButton {
                aria_label: Some("Toggle sidebar".to_string()),
                onclick: move |_| on_toggle_sidebar.call(()),
                MenuIcon { class: "w-5 h-5" }
            }
            TvIcon { class: "w-5 h-5 text-indigo-400" }
            h1 { class: "text-lg font-semibold text-white", "OMG Playlist Manager" }
            div { class: "flex-1" }
            if let Some(name) = username {
                span { class: "text-sm text-gray-400", "{name}" }
            }
            IconButton {
                title: Some("Sign out".to_string()),
                aria_label: Some("Sign out".to_string()),
                onclick: move |_| on_logout.call(()),
                LogOutIcon { class: "w-5 h-5" }
            }
        }
    }
}
