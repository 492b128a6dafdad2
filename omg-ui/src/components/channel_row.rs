//! Channel row for the playlist detail view

use crate::components::icons::{ChevronDownIcon, ChevronUpIcon, PencilIcon, TrashIcon};
use crate::components::IconButton;
use dioxus::prelude::*;
use omg_common::Channel;

/// One channel in the playlist detail list, with reorder/edit/delete
/// controls.
#[component]
pub fn ChannelRow(
    channel: Channel,
    position: u32,
    is_first: bool,
    is_last: bool,
    /// Custom playlists borrow channels; removing detaches instead of
    /// deleting, and the row label says so.
    #[props(default)]
    detach_only: bool,
    on_move_up: EventHandler<i64>,
    on_move_down: EventHandler<i64>,
    on_edit: EventHandler<Channel>,
    on_delete: EventHandler<i64>,
) -> Element {
    let id = channel.id;
    let edit_channel = channel.clone();
    let delete_title = if detach_only { "Remove from playlist" } else { "Delete channel" };

    rsx! {
        div { class: "flex items-center gap-3 px-4 py-2 bg-gray-800 rounded-lg",
            span { class: "w-8 text-right text-sm text-gray-500", "{position}" }
            if let Some(logo) = channel.logo_url.clone() {
                img { class: "w-8 h-8 rounded object-contain bg-gray-900", src: "{logo}" }
            } else {
                div { class: "w-8 h-8 rounded bg-gray-700" }
            }
            div { class: "flex-1 min-w-0",
                p { class: "text-white text-sm truncate", "{channel.name}" }
                p { class: "text-xs text-gray-500 truncate",
                    if let Some(group) = channel.group_title.clone() {
                        span { class: "text-gray-400 mr-2", "{group}" }
                    }
                    span { "{channel.url}" }
                }
            }
            div { class: "flex items-center gap-1",
                IconButton {
                    aria_label: Some("Move up".to_string()),
                    disabled: is_first,
                    onclick: move |_| on_move_up.call(id),
                    ChevronUpIcon {}
                }
                IconButton {
                    aria_label: Some("Move down".to_string()),
                    disabled: is_last,
                    onclick: move |_| on_move_down.call(id),
                    ChevronDownIcon {}
                }
                IconButton {
                    aria_label: Some("Edit".to_string()),
                    onclick: move |_| on_edit.call(edit_channel.clone()),
                    PencilIcon {}
                }
                IconButton {
                    title: Some(delete_title.to_string()),
                    class: Some("hover:text-red-400".to_string()),
                    onclick: move |_| on_delete.call(id),
                    TrashIcon {}
                }
            }
        }
    }
}
