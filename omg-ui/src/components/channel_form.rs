//! Channel create/edit form view

use crate::components::{Button, ButtonSize, ButtonVariant, FormField, Modal};
use crate::validate::{validate_channel_form, ChannelFormErrors};
use dioxus::prelude::*;
use omg_common::Channel;

/// Values collected by the channel form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChannelFormValues {
    pub name: String,
    pub url: String,
    pub group_title: String,
    pub logo_url: String,
    pub tvg_id: String,
}

impl From<&Channel> for ChannelFormValues {
    fn from(channel: &Channel) -> Self {
        Self {
            name: channel.name.clone(),
            url: channel.url.clone(),
            group_title: channel.group_title.clone().unwrap_or_default(),
            logo_url: channel.logo_url.clone().unwrap_or_default(),
            tvg_id: channel.tvg_id.clone().unwrap_or_default(),
        }
    }
}

/// Channel form rendered inside a modal. `on_submit` only fires with a
/// valid set of values.
#[component]
pub fn ChannelFormDialog(
    title: String,
    #[props(default)] initial: ChannelFormValues,
    #[props(default)] busy: bool,
    on_submit: EventHandler<ChannelFormValues>,
    on_cancel: EventHandler<()>,
) -> Element {
    let ChannelFormValues {
        name: initial_name,
        url: initial_url,
        group_title: initial_group_title,
        logo_url: initial_logo_url,
        tvg_id: initial_tvg_id,
    } = initial;
    let mut name = use_signal(move || initial_name);
    let mut url = use_signal(move || initial_url);
    let mut group_title = use_signal(move || initial_group_title);
    let mut logo_url = use_signal(move || initial_logo_url);
    let mut tvg_id = use_signal(move || initial_tvg_id);
    let mut errors = use_signal(ChannelFormErrors::default);

    let submit = move |_| {
        let found = validate_channel_form(&name(), &url(), &logo_url());
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        errors.set(ChannelFormErrors::default());
        on_submit.call(ChannelFormValues {
            name: name().trim().to_string(),
            url: url().trim().to_string(),
            group_title: group_title().trim().to_string(),
            logo_url: logo_url().trim().to_string(),
            tvg_id: tvg_id().trim().to_string(),
        });
    };

    rsx! {
        Modal { on_close: move |_| on_cancel.call(()),
            div { class: "bg-gray-800 rounded-lg p-6 max-w-lg w-full mx-4",
                h2 { class: "text-xl font-bold text-white mb-4", "{title}" }
                FormField {
                    label: "Name",
                    value: name(),
                    error: errors().name,
                    on_input: move |v| name.set(v),
                }
                FormField {
                    label: "Stream URL",
                    value: url(),
                    placeholder: Some("http://provider.example/stream"),
                    error: errors().url,
                    on_input: move |v| url.set(v),
                }
                FormField {
                    label: "Group (optional)",
                    value: group_title(),
                    on_input: move |v| group_title.set(v),
                }
                FormField {
                    label: "Logo URL (optional)",
                    value: logo_url(),
                    error: errors().logo_url,
                    on_input: move |v| logo_url.set(v),
                }
                FormField {
                    label: "TVG id (optional)",
                    value: tvg_id(),
                    on_input: move |v| tvg_id.set(v),
                }
                div { class: "flex gap-3 justify-end mt-2",
                    Button {
                        variant: ButtonVariant::Secondary,
                        size: ButtonSize::Medium,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        size: ButtonSize::Medium,
                        loading: busy,
                        onclick: submit,
                        "Save"
                    }
                }
            }
        }
    }
}
