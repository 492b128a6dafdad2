//! Playlist summary card for the list view

use crate::components::icons::{CheckIcon, LinkIcon, LoaderIcon, RefreshIcon, TrashIcon, XIcon};
use crate::components::IconButton;
use crate::stores::SyncStatus;
use dioxus::prelude::*;
use omg_common::Playlist;

/// Card showing a playlist's summary with sync/share/delete actions.
/// Clicking the card opens the detail view.
#[component]
pub fn PlaylistCard(
    playlist: Playlist,
    sync_status: SyncStatus,
    on_open: EventHandler<i64>,
    on_sync: EventHandler<i64>,
    on_public_link: EventHandler<i64>,
    on_delete: EventHandler<i64>,
) -> Element {
    let id = playlist.id;
    let channel_count = playlist.channels.len();
    let last_sync = playlist
        .last_sync
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string());
    let kind = if playlist.is_custom { "Custom" } else { "Standard" };
    let syncing = sync_status == SyncStatus::Syncing;

    rsx! {
        div {
            class: "bg-gray-800 rounded-lg p-4 hover:bg-gray-700/70 hover:ring-1 hover:ring-indigo-500/40 cursor-pointer",
            onclick: move |_| on_open.call(id),
            div { class: "flex items-start justify-between gap-2",
                div { class: "min-w-0",
                    h3 { class: "text-white font-medium truncate", "{playlist.name}" }
                    p { class: "text-sm text-gray-400 mt-1",
                        "{kind} · {channel_count} channels"
                    }
                    if let Some(ts) = last_sync {
                        p { class: "text-xs text-gray-500 mt-1", "Last sync {ts}" }
                    }
                }
                div { class: "flex items-center gap-1",
                    {match sync_status {
                        SyncStatus::Syncing => rsx! {
                            LoaderIcon { class: "w-4 h-4 text-indigo-400 animate-spin" }
                        },
                        SyncStatus::Success => rsx! {
                            CheckIcon { class: "w-4 h-4 text-green-500" }
                        },
                        SyncStatus::Error => rsx! {
                            XIcon { class: "w-4 h-4 text-red-500" }
                        },
                        SyncStatus::Idle => rsx! {},
                    }}
                    if !playlist.is_custom {
                        IconButton {
                            title: Some("Sync from source".to_string()),
                            disabled: syncing,
                            onclick: move |e: MouseEvent| {
                                e.stop_propagation();
                                on_sync.call(id);
                            },
                            RefreshIcon {}
                        }
                    }
                    IconButton {
                        title: Some("Public link".to_string()),
                        onclick: move |e: MouseEvent| {
                            e.stop_propagation();
                            on_public_link.call(id);
                        },
                        LinkIcon {}
                    }
                    IconButton {
                        title: Some("Delete".to_string()),
                        class: Some("hover:text-red-400".to_string()),
                        onclick: move |e: MouseEvent| {
                            e.stop_propagation();
                            on_delete.call(id);
                        },
                        TrashIcon {}
                    }
                }
            }
        }
    }
}
