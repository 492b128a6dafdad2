//! Public link dialog view

use crate::components::icons::CopyIcon;
use crate::components::{Button, ButtonSize, ButtonVariant, IconButton, Modal};
use dioxus::prelude::*;
use omg_common::PublicLink;

/// Shows the shareable M3U URL (and EPG URL when set) with copy buttons.
#[component]
pub fn PublicLinkDialog(
    link: PublicLink,
    on_copy: EventHandler<String>,
    on_close: EventHandler<()>,
) -> Element {
    let public_url = link.public_url.clone();
    let epg_url = link.epg_url.clone();

    rsx! {
        Modal { on_close: move |_| on_close.call(()),
            div { class: "bg-gray-800 rounded-lg p-6 max-w-lg w-full mx-4",
                h2 { class: "text-xl font-bold text-white mb-2", "Public link" }
                p { class: "text-sm text-gray-400 mb-4",
                    "Anyone with this link can download the playlist as M3U."
                }
                div { class: "flex items-center gap-2 bg-gray-900 rounded-lg px-3 py-2 mb-3",
                    code { class: "flex-1 text-sm text-gray-300 truncate select-text",
                        "{link.public_url}"
                    }
                    IconButton {
                        title: Some("Copy".to_string()),
                        onclick: move |_| on_copy.call(public_url.clone()),
                        CopyIcon {}
                    }
                }
                if let Some(epg) = epg_url {
                    {
                        let epg_for_copy = epg.clone();
                        rsx! {
                            div { class: "flex items-center gap-2 bg-gray-900 rounded-lg px-3 py-2 mb-3",
                                span { class: "text-xs text-gray-500", "EPG" }
                                code { class: "flex-1 text-sm text-gray-300 truncate select-text", "{epg}" }
                                IconButton {
                                    title: Some("Copy".to_string()),
                                    onclick: move |_| on_copy.call(epg_for_copy.clone()),
                                    CopyIcon {}
                                }
                            }
                        }
                    }
                }
                div { class: "flex justify-end",
                    Button {
                        variant: ButtonVariant::Secondary,
                        size: ButtonSize::Medium,
                        onclick: move |_| on_close.call(()),
                        "Close"
                    }
                }
            }
        }
    }
}
