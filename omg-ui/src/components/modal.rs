//! Modal overlay component
//!
//! A fixed full-screen backdrop with centered content. Clicking the
//! backdrop closes the modal; clicks inside the content don't propagate.
//! Modals stack in render order, so the newest sits on top and closing it
//! reveals the one beneath.

use dioxus::prelude::*;

/// Modal overlay wrapping arbitrary content
#[component]
pub fn Modal(
    /// Called when the backdrop is clicked
    on_close: EventHandler<()>,
    /// Modal content
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 z-40 bg-black/70 flex items-center justify-center",
            onclick: move |_| on_close.call(()),
            div { onclick: move |evt| evt.stop_propagation(), {children} }
        }
    }
}
