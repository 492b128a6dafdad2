//! Add-playlist page.

use crate::pages::layout::none_if_empty;
use crate::store;
use crate::Route;
use dioxus::prelude::*;
use omg_common::NewPlaylist;
use omg_ui::stores::ToastSeverity;
use omg_ui::{PageContainer, PlaylistFormValues, PlaylistFormView};

#[component]
pub fn AddPlaylist() -> Element {
    let nav = navigator();
    let state = store::PLAYLISTS();

    rsx! {
        PageContainer {
            h2 { class: "text-2xl font-bold text-white mb-6", "Add playlist" }
            if let Some(error) = state.error.clone() {
                p { class: "text-sm text-red-400 mb-4", "{error}" }
            }
            PlaylistFormView {
                allow_kind_choice: true,
                submit_label: "Create".to_string(),
                busy: state.loading.save,
                on_submit: move |values: PlaylistFormValues| {
                    let new = NewPlaylist {
                        name: values.name,
                        url: none_if_empty(values.url),
                        epg_url: none_if_empty(values.epg_url),
                        is_custom: values.is_custom,
                    };
                    spawn(async move {
                        if let Some(playlist) = store::playlists::create_playlist(new).await {
                            store::ui::show_toast("Playlist created", ToastSeverity::Success);
                            nav.push(Route::PlaylistDetail { id: playlist.id });
                        }
                    });
                },
                on_cancel: move |_| {
                    nav.push(Route::Playlists {});
                },
            }
        }
    }
}
