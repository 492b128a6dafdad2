//! Channel picker dialog for custom playlists
//!
//! Lists channels from the user's other playlists so they can be attached
//! to a custom playlist.

use crate::components::{
    Button, ButtonSize, ButtonVariant, LoadingSpinner, Modal, TextInput,
};
use dioxus::prelude::*;
use omg_common::Channel;

/// Picker over the channels available to a custom playlist.
#[component]
pub fn ChannelPickerDialog(
    channels: Vec<Channel>,
    loading: bool,
    #[props(default)] error: Option<String>,
    on_add: EventHandler<i64>,
    on_close: EventHandler<()>,
) -> Element {
    let mut query = use_signal(String::new);

    let filter = query().to_lowercase();
    let visible: Vec<Channel> = channels
        .into_iter()
        .filter(|c| {
            filter.is_empty()
                || c.name.to_lowercase().contains(&filter)
                || c.group_title
                    .as_deref()
                    .is_some_and(|g| g.to_lowercase().contains(&filter))
        })
        .collect();

    rsx! {
        Modal { on_close: move |_| on_close.call(()),
            div { class: "bg-gray-800 rounded-lg p-6 max-w-lg w-full mx-4",
                h2 { class: "text-xl font-bold text-white mb-4", "Add existing channel" }
                div { class: "mb-3",
                    TextInput {
                        value: query(),
                        placeholder: Some("Filter by name or group"),
                        on_input: move |v| query.set(v),
                    }
                }
                if loading {
                    LoadingSpinner { message: "Loading channels...".to_string() }
                } else if let Some(message) = error {
                    p { class: "text-sm text-red-400 py-4", "{message}" }
                } else if visible.is_empty() {
                    p { class: "text-sm text-gray-500 py-4", "No channels available." }
                } else {
                    div { class: "max-h-80 overflow-y-auto space-y-1",
                        {visible.into_iter().map(|channel| {
                            let id = channel.id;
                            rsx! {
                                div {
                                    key: "{id}",
                                    class: "flex items-center gap-3 px-3 py-2 bg-gray-900/60 rounded-lg",
                                    div { class: "flex-1 min-w-0",
                                        p { class: "text-sm text-white truncate", "{channel.name}" }
                                        if let Some(group) = channel.group_title.clone() {
                                            p { class: "text-xs text-gray-500 truncate", "{group}" }
                                        }
                                    }
                                    Button {
                                        variant: ButtonVariant::Secondary,
                                        size: ButtonSize::Small,
                                        onclick: move |_| on_add.call(id),
                                        "Add"
                                    }
                                }
                            }
                        })}
                    }
                }
                div { class: "flex justify-end mt-4",
                    Button {
                        variant: ButtonVariant::Secondary,
                        size: ButtonSize::Medium,
                        onclick: move |_| on_close.call(()),
                        "Done"
                    }
                }
            }
        }
    }
}
