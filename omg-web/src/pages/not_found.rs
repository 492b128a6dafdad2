//! Catch-all page: bounce unknown paths back to the playlist list.

use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let nav = navigator();
    let path = segments.join("/");

    use_effect(move || {
        nav.replace(Route::Playlists {});
    });

    rsx! {
        div { class: "min-h-screen flex items-center justify-center text-gray-500",
            "No page at /{path}."
        }
    }
}
