//! App shell: header, sidebar, toast and modal hosts around the router
//! outlet.

use crate::store;
use crate::{Route, APP_VERSION};
use dioxus::prelude::*;
use omg_common::{Channel, ChannelPatch, NewChannel, PublicLink};
use omg_ui::stores::{ModalRequest, ToastSeverity};
use omg_ui::{
    AppShellView, ChannelFormDialog, ChannelFormValues, ChannelPickerDialog, ConfirmDialogView,
    HeaderView, NavItem, PublicLinkDialog, SidebarView, ToastView,
};
use wasm_bindgen_futures::JsFuture;

pub(crate) fn none_if_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// The playlists slice error, or a fallback, for toast messages.
fn playlists_error_or(fallback: &str) -> String {
    store::PLAYLISTS()
        .error
        .unwrap_or_else(|| fallback.to_string())
}

pub(crate) fn copy_to_clipboard(text: String) {
    spawn(async move {
        let Some(window) = web_sys::window() else {
            return;
        };
        let promise = window.navigator().clipboard().write_text(&text);
        if JsFuture::from(promise).await.is_ok() {
            store::ui::show_toast("Copied to clipboard", ToastSeverity::Success);
        } else {
            store::ui::show_toast("Could not access the clipboard", ToastSeverity::Error);
        }
    });
}

#[component]
pub fn AppShell() -> Element {
    let route = use_route::<Route>();
    let nav = navigator();
    let ui = store::UI();
    let auth = store::AUTH();

    let nav_items = vec![
        NavItem {
            id: "playlists".to_string(),
            label: "Playlists".to_string(),
            is_active: matches!(route, Route::Playlists {} | Route::PlaylistDetail { .. }),
        },
        NavItem {
            id: "add".to_string(),
            label: "Add playlist".to_string(),
            is_active: matches!(route, Route::AddPlaylist {}),
        },
    ];

    rsx! {
        AppShellView {
            header: rsx! {
                HeaderView {
                    username: auth.user.as_ref().map(|u| u.username.clone()),
                    on_toggle_sidebar: move |_| store::ui::toggle_sidebar(),
                    on_logout: move |_| {
                        store::auth::logout();
                        nav.replace(Route::Login { from: String::new() });
                    },
                }
            },
            sidebar: rsx! {
                SidebarView {
                    is_open: ui.sidebar.is_open,
                    nav_items,
                    version: APP_VERSION.to_string(),
                    on_nav_click: move |id: String| {
                        match id.as_str() {
                            "playlists" => {
                                nav.push(Route::Playlists {});
                            }
                            "add" => {
                                nav.push(Route::AddPlaylist {});
                            }
                            _ => {}
                        }
                    },
                }
            },
            overlays: rsx! {
                if let Some(toast) = ui.toast.clone() {
                    ToastView { toast, on_dismiss: move |id| store::ui::dismiss_toast(id) }
                }
                ModalHost {}
            },
            Outlet::<Route> {}
        }
    }
}

/// Renders the whole modal stack in order; the newest entry sits on top
/// and closing it reveals the one beneath.
#[component]
fn ModalHost() -> Element {
    let modals = store::UI().modals;

    rsx! {
        {modals.into_iter().map(|modal| match modal {
            ModalRequest::ConfirmDeletePlaylist { id, name } => rsx! {
                DeletePlaylistModal { id, name }
            },
            ModalRequest::ConfirmDeleteChannel { id, name, detach_from } => rsx! {
                DeleteChannelModal { id, name, detach_from }
            },
            ModalRequest::AddChannel { playlist_id } => rsx! {
                AddChannelModal { playlist_id }
            },
            ModalRequest::EditChannel { channel } => rsx! {
                EditChannelModal { channel }
            },
            ModalRequest::PickChannels { playlist_id } => rsx! {
                PickChannelsModal { playlist_id }
            },
            ModalRequest::PublicLink { link } => rsx! {
                PublicLinkModal { link }
            },
        })}
    }
}

#[component]
fn DeletePlaylistModal(id: i64, name: String) -> Element {
    let busy = store::PLAYLISTS().loading.delete;

    rsx! {
        ConfirmDialogView {
            title: "Delete playlist".to_string(),
            message: format!("Delete \"{name}\"? Its channels and public link go with it."),
            confirm_label: "Delete".to_string(),
            busy,
            on_confirm: move |_| {
                spawn(async move {
                    let ok = store::playlists::delete_playlist(id).await;
                    store::ui::close_modal();
                    if ok {
                        store::ui::show_toast("Playlist deleted", ToastSeverity::Success);
                    } else {
                        store::ui::show_toast(
                            playlists_error_or("Failed to delete playlist"),
                            ToastSeverity::Error,
                        );
                    }
                });
            },
            on_cancel: move |_| store::ui::close_modal(),
        }
    }
}

#[component]
fn DeleteChannelModal(id: i64, name: String, detach_from: Option<i64>) -> Element {
    let (title, message, confirm_label) = if detach_from.is_some() {
        (
            "Remove channel",
            format!("Remove \"{name}\" from this playlist?"),
            "Remove",
        )
    } else {
        (
            "Delete channel",
            format!("Delete \"{name}\"? This cannot be undone."),
            "Delete",
        )
    };

    rsx! {
        ConfirmDialogView {
            title: title.to_string(),
            message,
            confirm_label: confirm_label.to_string(),
            on_confirm: move |_| {
                spawn(async move {
                    let ok = match detach_from {
                        Some(playlist_id) => {
                            store::playlists::remove_channel_from_custom(playlist_id, id).await
                        }
                        None => store::playlists::delete_channel(id).await,
                    };
                    store::ui::close_modal();
                    if ok {
                        store::ui::show_toast("Channel removed", ToastSeverity::Success);
                    } else {
                        store::ui::show_toast(
                            playlists_error_or("Failed to remove channel"),
                            ToastSeverity::Error,
                        );
                    }
                });
            },
            on_cancel: move |_| store::ui::close_modal(),
        }
    }
}

#[component]
fn AddChannelModal(playlist_id: i64) -> Element {
    rsx! {
        ChannelFormDialog {
            title: "Add channel".to_string(),
            on_submit: move |values: ChannelFormValues| {
                let new = NewChannel {
                    name: values.name,
                    url: values.url,
                    group_title: none_if_empty(values.group_title),
                    logo_url: none_if_empty(values.logo_url),
                    tvg_id: none_if_empty(values.tvg_id),
                    extra_tags: Default::default(),
                };
                spawn(async move {
                    let ok = store::playlists::add_channel(playlist_id, new).await;
                    store::ui::close_modal();
                    if ok {
                        store::ui::show_toast("Channel added", ToastSeverity::Success);
                    } else {
                        store::ui::show_toast(
                            playlists_error_or("Failed to add channel"),
                            ToastSeverity::Error,
                        );
                    }
                });
            },
            on_cancel: move |_| store::ui::close_modal(),
        }
    }
}

#[component]
fn EditChannelModal(channel: Channel) -> Element {
    let channel_id = channel.id;
    let initial = ChannelFormValues::from(&channel);

    rsx! {
        ChannelFormDialog {
            title: "Edit channel".to_string(),
            initial,
            on_submit: move |values: ChannelFormValues| {
                let patch = ChannelPatch {
                    name: Some(values.name),
                    url: Some(values.url),
                    group_title: none_if_empty(values.group_title),
                    logo_url: none_if_empty(values.logo_url),
                    tvg_id: none_if_empty(values.tvg_id),
                    extra_tags: None,
                };
                spawn(async move {
                    let ok = store::playlists::update_channel(channel_id, patch).await;
                    store::ui::close_modal();
                    if ok {
                        store::ui::show_toast("Channel updated", ToastSeverity::Success);
                    } else {
                        store::ui::show_toast(
                            playlists_error_or("Failed to update channel"),
                            ToastSeverity::Error,
                        );
                    }
                });
            },
            on_cancel: move |_| store::ui::close_modal(),
        }
    }
}

#[component]
fn PickChannelsModal(playlist_id: i64) -> Element {
    let mut available = use_resource(move || async move {
        crate::api::client().available_channels(playlist_id).await
    });

    let (channels, loading, error) = match &*available.read() {
        Some(Ok(channels)) => (channels.clone(), false, None),
        Some(Err(err)) => (Vec::new(), false, Some(err.to_string())),
        None => (Vec::new(), true, None),
    };

    rsx! {
        ChannelPickerDialog {
            channels,
            loading,
            error,
            on_add: move |channel_id| {
                spawn(async move {
                    if store::playlists::add_channel_to_custom(playlist_id, channel_id).await {
                        store::ui::show_toast("Channel added", ToastSeverity::Success);
                        available.restart();
                    } else {
                        store::ui::show_toast(
                            playlists_error_or("Failed to add channel"),
                            ToastSeverity::Error,
                        );
                    }
                });
            },
            on_close: move |_| store::ui::close_modal(),
        }
    }
}

#[component]
fn PublicLinkModal(link: PublicLink) -> Element {
    rsx! {
        PublicLinkDialog {
            link,
            on_copy: move |text| copy_to_clipboard(text),
            on_close: move |_| store::ui::close_modal(),
        }
    }
}
