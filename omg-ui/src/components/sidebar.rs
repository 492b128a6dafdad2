//! Navigation sidebar view

use dioxus::prelude::*;

/// One sidebar navigation entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub id: String,
    pub label: String,
    pub is_active: bool,
}

/// Collapsible navigation sidebar with a version footer.
#[component]
pub fn SidebarView(
    is_open: bool,
    nav_items: Vec<NavItem>,
    version: String,
    on_nav_click: EventHandler<String>,
) -> Element {
    if !is_open {
        return rsx! {};
    }

    rsx! {
        nav { class: "w-56 flex flex-col bg-gray-800/60 border-r border-gray-700",
            div { class: "flex-1 py-4",
                {nav_items.into_iter().map(|item| {
                    let NavItem { id, label, is_active } = item;
                    let active = if is_active {
                        "bg-gray-700/60 text-white"
                    } else {
                        "text-gray-400 hover:text-white hover:bg-gray-700/40"
                    };
                    rsx! {
                        button {
                            key: "{id}",
                            class: "w-full text-left px-4 py-2 text-sm {active}",
                            onclick: move |_| on_nav_click.call(id.clone()),
                            "{label}"
                        }
                    }
                })}
            }
            div { class: "px-4 py-3 text-xs text-gray-500 border-t border-gray-700",
                "v{version}"
            }
        }
    }
}
