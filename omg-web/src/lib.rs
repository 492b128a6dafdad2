//! omg-web - Browser app for the OMG playlist manager
//!
//! A Dioxus single-page application over the playlist REST API.

pub mod api;
pub mod guard;
pub mod pages;
pub mod session;
pub mod store;

use dioxus::prelude::*;
use guard::AuthGuard;
use pages::{AddPlaylist, AppShell, Login, PageNotFound, PlaylistDetail, Playlists};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Base URL of the playlist API, overridable at build time.
pub const API_BASE_URL: &str = match option_env!("OMG_API_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AuthGuard)]
        #[route("/login?:from")]
        Login { from: String },
        #[redirect("/", || Route::Playlists {})]
        #[layout(AppShell)]
            #[route("/playlists")]
            Playlists {},
            #[route("/playlists/add")]
            AddPlaylist {},
            #[route("/playlists/:id")]
            PlaylistDetail { id: i64 },
        #[end_layout]
    #[end_layout]
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Script { src: "https://cdn.tailwindcss.com" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ErrorBoundary {
            handle_error: |_| rsx! {
                div { class: "min-h-screen flex items-center justify-center text-gray-300",
                    "Something went wrong. Reload the page to continue."
                }
            },
            Router::<Route> {}
        }
    }
}
