//! Toast notification view

use crate::components::icons::XIcon;
use crate::components::IconButton;
use crate::stores::{Toast, ToastSeverity};
use dioxus::prelude::*;

/// A dismissible toast notification, bottom-right. The store guarantees at
/// most one is visible.
#[component]
pub fn ToastView(toast: Toast, on_dismiss: EventHandler<u64>) -> Element {
    let color = match toast.severity {
        ToastSeverity::Success => "bg-green-600",
        ToastSeverity::Error => "bg-red-600",
        ToastSeverity::Info => "bg-gray-700",
        ToastSeverity::Warning => "bg-amber-600",
    };
    let id = toast.id;

    rsx! {
        div { class: "fixed bottom-4 right-4 {color} text-white px-6 py-4 rounded-lg shadow-lg z-50 max-w-md",
            div { class: "flex items-center justify-between gap-4",
                div { class: "flex-1",
                    span { "{toast.message}" }
                }
                IconButton {
                    class: Some("text-white hover:text-gray-200".to_string()),
                    aria_label: Some("Dismiss".to_string()),
                    onclick: move |_| on_dismiss.call(id),
                    XIcon { class: "w-4 h-4" }
                }
            }
        }
    }
}
