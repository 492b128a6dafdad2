//! Playlist detail page: metadata editing, channel management, sync, and
//! the public link.

use crate::pages::layout::none_if_empty;
use crate::pages::{open_public_link, sync_with_toast};
use crate::store;
use crate::Route;
use dioxus::prelude::*;
use omg_common::{move_channel, Channel, MoveDirection, PlaylistPatch};
use omg_ui::stores::{ModalRequest, SyncStatus, ToastSeverity};
use omg_ui::{
    Button, ButtonSize, ButtonVariant, ChannelRow, CheckIcon, ErrorBanner, LinkIcon,
    LoaderIcon, LoadingSpinner, PageContainer, PlaylistFormValues, PlaylistFormView, PlusIcon,
    RefreshIcon, XIcon,
};

/// Compute the reorder payload from the playlist as currently cached and
/// push it to the server.
fn move_channel_now(playlist_id: i64, channel_id: i64, direction: MoveDirection) {
    let current = store::PLAYLISTS()
        .current
        .clone()
        .filter(|p| p.id == playlist_id);
    let Some(playlist) = current else {
        return;
    };
    let ordered = playlist.channels_in_order();
    let Some(orders) = move_channel(&ordered, channel_id, direction) else {
        return;
    };

    spawn(async move {
        if !store::playlists::reorder_channels(playlist_id, orders).await {
            let message = store::PLAYLISTS()
                .error
                .unwrap_or_else(|| "Failed to reorder channels".to_string());
            store::ui::show_toast(message, ToastSeverity::Error);
        }
    });
}

#[component]
pub fn PlaylistDetail(id: i64) -> Element {
    use_effect(use_reactive((&id,), |(id,)| {
        spawn(async move {
            store::playlists::load_playlist(id).await;
        });
    }));
    use_drop(|| store::playlists::clear_current());

    let state = store::PLAYLISTS();
    let nav = navigator();

    let Some(playlist) = state.current.clone().filter(|p| p.id == id) else {
        return rsx! {
            PageContainer {
                if let Some(error) = state.error.clone() {
                    ErrorBanner {
                        heading: "Could not load playlist".to_string(),
                        detail: error,
                        on_retry: move |_| {
                            spawn(async move {
                                store::playlists::load_playlist(id).await;
                            });
                        },
                    }
                } else {
                    LoadingSpinner { message: "Loading playlist...".to_string() }
                }
            }
        };
    };

    let is_custom = playlist.is_custom;
    let kind = if is_custom { "Custom" } else { "Standard" };
    let sync_status = state.sync_status(id);
    let ordered: Vec<Channel> = playlist.channels_in_order().into_iter().cloned().collect();
    let count = ordered.len();

    rsx! {
        PageContainer {
            div { class: "flex items-center gap-3 mb-6",
                Button {
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Small,
                    onclick: move |_| {
                        nav.push(Route::Playlists {});
                    },
                    "< Playlists"
                }
                h2 { class: "text-2xl font-bold text-white truncate", "{playlist.name}" }
                span { class: "text-xs uppercase tracking-wide text-gray-500 bg-gray-800 rounded px-2 py-1",
                    "{kind}"
                }
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
                div { class: "flex-1" }
                if !is_custom {
                    Button {
                        variant: ButtonVariant::Secondary,
                        size: ButtonSize::Small,
                        disabled: sync_status == SyncStatus::Syncing,
                        onclick: move |_| sync_with_toast(id),
                        RefreshIcon {}
                        "Sync"
                    }
                }
                Button {
                    variant: ButtonVariant::Secondary,
                    size: ButtonSize::Small,
                    onclick: move |_| open_public_link(id),
                    LinkIcon {}
                    "Public link"
                }
            }

            section { class: "mb-8",
                h3 { class: "text-lg font-semibold text-white mb-3", "Details" }
                PlaylistFormView {
                    initial: PlaylistFormValues {
                        name: playlist.name.clone(),
                        url: playlist.url.clone().unwrap_or_default(),
                        epg_url: playlist.epg_url.clone().unwrap_or_default(),
                        is_custom,
                    },
                    submit_label: "Save changes".to_string(),
                    busy: state.loading.save,
                    on_submit: move |values: PlaylistFormValues| {
                        let patch = PlaylistPatch {
                            name: Some(values.name),
                            url: none_if_empty(values.url),
                            epg_url: none_if_empty(values.epg_url),
                        };
                        spawn(async move {
                            if store::playlists::update_playlist(id, patch).await {
                                store::ui::show_toast("Playlist saved", ToastSeverity::Success);
                            } else {
                                let message = store::PLAYLISTS()
                                    .error
                                    .unwrap_or_else(|| "Failed to save playlist".to_string());
                                store::ui::show_toast(message, ToastSeverity::Error);
                            }
                        });
                    },
                }
            }

            section {
                div { class: "flex items-center justify-between mb-3",
                    h3 { class: "text-lg font-semibold text-white", "Channels ({count})" }
                    Button {
                        variant: ButtonVariant::Secondary,
                        size: ButtonSize::Small,
                        onclick: move |_| {
                            if is_custom {
                                store::ui::push_modal(ModalRequest::PickChannels { playlist_id: id });
                            } else {
                                store::ui::push_modal(ModalRequest::AddChannel { playlist_id: id });
                            }
                        },
                        PlusIcon {}
                        "Add channel"
                    }
                }
                if ordered.is_empty() {
                    p { class: "text-sm text-gray-500 py-8 text-center", "No channels yet." }
                } else {
                    div { class: "space-y-2",
                        {ordered.into_iter().enumerate().map(|(index, channel)| {
                            let row_key = channel.id;
                            let channel_name = channel.name.clone();
                            let is_first = index == 0;
                            let is_last = index + 1 == count;
                            rsx! {
                                ChannelRow {
                                    key: "{row_key}",
                                    channel,
                                    position: (index + 1) as u32,
                                    is_first,
                                    is_last,
                                    detach_only: is_custom,
                                    on_move_up: move |channel_id| {
                                        move_channel_now(id, channel_id, MoveDirection::Up);
                                    },
                                    on_move_down: move |channel_id| {
                                        move_channel_now(id, channel_id, MoveDirection::Down);
                                    },
                                    on_edit: move |channel| {
                                        store::ui::push_modal(ModalRequest::EditChannel { channel });
                                    },
                                    on_delete: move |channel_id| {
                                        store::ui::push_modal(ModalRequest::ConfirmDeleteChannel {
                                            id: channel_id,
                                            name: channel_name.clone(),
                                            detach_from: is_custom.then_some(id),
                                        });
                                    },
                                }
                            }
                        })}
                    }
                }
            }
        }
    }
}
