//! Playlist create/edit form view

use crate::components::{Button, ButtonSize, ButtonVariant, FormField};
use crate::validate::{validate_playlist_form, PlaylistFormErrors};
use dioxus::prelude::*;

/// Values collected by the playlist form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlaylistFormValues {
    pub name: String,
    pub url: String,
    pub epg_url: String,
    pub is_custom: bool,
}

/// Controlled playlist form. Validation is field-scoped and blocks
/// submission; `on_submit` only fires with a valid set of values.
#[component]
pub fn PlaylistFormView(
    #[props(default)] initial: PlaylistFormValues,
    /// Whether the playlist type can still be chosen (create only).
    #[props(default)] allow_kind_choice: bool,
    #[props(default = "Save".to_string())] submit_label: String,
    #[props(default)] busy: bool,
    on_submit: EventHandler<PlaylistFormValues>,
    #[props(default)] on_cancel: Option<EventHandler<()>>,
) -> Element {
    let PlaylistFormValues {
        name: initial_name,
        url: initial_url,
        epg_url: initial_epg_url,
        is_custom: initial_is_custom,
    } = initial;
    let mut name = use_signal(move || initial_name);
    let mut url = use_signal(move || initial_url);
    let mut epg_url = use_signal(move || initial_epg_url);
    let mut is_custom = use_signal(move || initial_is_custom);
    let mut errors = use_signal(PlaylistFormErrors::default);

    let submit = move |_| {
        let found = validate_playlist_form(&name(), &url(), &epg_url(), is_custom());
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        errors.set(PlaylistFormErrors::default());
        on_submit.call(PlaylistFormValues {
            name: name().trim().to_string(),
            url: url().trim().to_string(),
            epg_url: epg_url().trim().to_string(),
            is_custom: is_custom(),
        });
    };

    rsx! {
        div { class: "bg-gray-800 rounded-lg p-6 max-w-lg w-full",
            FormField {
                label: "Name",
                value: name(),
                placeholder: Some("My playlist"),
                error: errors().name,
                on_input: move |v| name.set(v),
            }
            if allow_kind_choice {
                div { class: "mb-4 flex items-center gap-2",
                    input {
                        r#type: "checkbox",
                        id: "playlist-is-custom",
                        checked: is_custom(),
                        onchange: move |e| is_custom.set(e.checked()),
                    }
                    label { class: "text-sm text-gray-300", r#for: "playlist-is-custom",
                        "Custom playlist (assembled by hand, no source URL)"
                    }
                }
            }
            if !is_custom() {
                FormField {
                    label: "Source URL",
                    value: url(),
                    placeholder: Some("http://provider.example/list.m3u"),
                    error: errors().url,
                    on_input: move |v| url.set(v),
                }
            }
            FormField {
                label: "EPG URL (optional)",
                value: epg_url(),
                placeholder: Some("http://provider.example/epg.xml"),
                error: errors().epg_url,
                on_input: move |v| epg_url.set(v),
            }
            div { class: "flex gap-3 justify-end mt-2",
                if let Some(cancel) = on_cancel {
                    Button {
                        variant: ButtonVariant::Secondary,
                        size: ButtonSize::Medium,
                        onclick: move |_| cancel.call(()),
                        "Cancel"
                    }
                }
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Medium,
                    loading: busy,
                    onclick: submit,
                    "{submit_label}"
                }
            }
        }
    }
}
