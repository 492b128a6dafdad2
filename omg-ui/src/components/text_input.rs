//! Reusable text input and labeled form field components

use dioxus::prelude::*;

/// Reusable text input with consistent styling
#[component]
pub fn TextInput(
    value: String,
    on_input: EventHandler<String>,
    #[props(default)] placeholder: Option<&'static str>,
    #[props(default)] disabled: bool,
    #[props(default)] id: Option<String>,
    #[props(default = "text")] r#type: &'static str,
    #[props(default)] invalid: bool,
) -> Element {
    let ring = if invalid {
        "ring-1 ring-red-500/60 focus:ring-red-500"
    } else {
        "focus:ring-1 focus:ring-indigo-500/50"
    };

    rsx! {
        input {
            r#type,
            class: "w-full bg-gray-800/50 rounded-lg px-3 py-2 focus:outline-none text-gray-300 placeholder-gray-500 {ring}",
            id: id.as_deref(),
            value: "{value}",
            placeholder,
            disabled,
            oninput: move |e| on_input.call(e.value()),
        }
    }
}

/// A labeled form field wrapping a text input, with an inline error line.
#[component]
pub fn FormField(
    label: &'static str,
    value: String,
    on_input: EventHandler<String>,
    #[props(default)] error: Option<String>,
    #[props(default)] placeholder: Option<&'static str>,
    #[props(default = "text")] r#type: &'static str,
    #[props(default)] disabled: bool,
) -> Element {
    rsx! {
        div { class: "mb-4",
            label { class: "block text-sm font-medium text-gray-300 mb-1", "{label}" }
            TextInput {
                value,
                on_input,
                placeholder,
                r#type,
                disabled,
                invalid: error.is_some(),
            }
            if let Some(message) = error {
                p { class: "mt-1 text-sm text-red-400", "{message}" }
            }
        }
    }
}
