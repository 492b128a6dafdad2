//! App shell view component
//!
//! Provides the overall structure with slots for the header, sidebar, main
//! content, and overlay elements (toast, modals).

use dioxus::prelude::*;

/// App shell view (pure, props-based)
#[component]
pub fn AppShellView(
    /// Main content (typically the router outlet)
    children: Element,
    /// Header bar at the top
    #[props(default)]
    header: Option<Element>,
    /// Navigation sidebar
    #[props(default)]
    sidebar: Option<Element>,
    /// Overlay elements (toast, modal stack)
    #[props(default)]
    overlays: Option<Element>,
) -> Element {
    rsx! {
        div { class: "h-screen flex flex-col bg-gray-900",
            if let Some(hd) = header {
                {hd}
            }
            div { class: "flex-1 flex min-h-0",
                if let Some(sb) = sidebar {
                    {sb}
                }
                main { class: "flex-1 overflow-y-auto", {children} }
            }
            if let Some(ov) = overlays {
                {ov}
            }
        }
    }
}

/// Standard page container with consistent padding
#[component]
pub fn PageContainer(children: Element) -> Element {
    rsx! {
        div { class: "container mx-auto p-6", {children} }
    }
}
