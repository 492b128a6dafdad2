//! Playlist list page.

use crate::pages::{open_public_link, sync_with_toast};
use crate::store;
use crate::Route;
use dioxus::prelude::*;
use omg_ui::stores::ModalRequest;
use omg_ui::{
    Button, ButtonSize, ButtonVariant, ErrorBanner, LoadingSpinner, PageContainer, PlaylistCard,
    PlusIcon,
};

#[component]
pub fn Playlists() -> Element {
    use_effect(|| {
        spawn(async {
            store::playlists::load_playlists().await;
        });
    });

    let state = store::PLAYLISTS();
    let nav = navigator();

    rsx! {
        PageContainer {
            div { class: "flex items-center justify-between mb-6",
                h2 { class: "text-2xl font-bold text-white", "Playlists" }
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Medium,
                    onclick: move |_| {
                        nav.push(Route::AddPlaylist {});
                    },
                    PlusIcon {}
                    "Add playlist"
                }
            }
            if let Some(error) = state.error.clone() {
                div { class: "mb-4",
                    ErrorBanner {
                        heading: "Could not load playlists".to_string(),
                        detail: error,
                        on_retry: move |_| {
                            spawn(async {
                                store::playlists::load_playlists().await;
                            });
                        },
                    }
                }
            }
            if state.loading.list && state.items.is_empty() {
                LoadingSpinner { message: "Loading playlists...".to_string() }
            } else if state.items.is_empty() && state.error.is_none() {
                div { class: "text-center py-16 text-gray-500",
                    p { class: "mb-4", "No playlists yet." }
                    Button {
                        variant: ButtonVariant::Secondary,
                        size: ButtonSize::Medium,
                        onclick: move |_| {
                            nav.push(Route::AddPlaylist {});
                        },
                        "Add your first playlist"
                    }
                }
            } else {
                div { class: "grid gap-3 md:grid-cols-2 xl:grid-cols-3",
                    {state.items.iter().cloned().map(|playlist| {
                        let id = playlist.id;
                        let name = playlist.name.clone();
                        let sync_status = state.sync_status(id);
                        rsx! {
                            PlaylistCard {
                                key: "{id}",
                                playlist,
                                sync_status,
                                on_open: move |id| {
                                    nav.push(Route::PlaylistDetail { id });
                                },
                                on_sync: move |id| sync_with_toast(id),
                                on_public_link: move |id| open_public_link(id),
                                on_delete: move |id| {
                                    store::ui::push_modal(ModalRequest::ConfirmDeletePlaylist {
                                        id,
                                        name: name.clone(),
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
