//! Login page.

use crate::guard::login_redirect_target;
use crate::store;
use dioxus::prelude::*;
use omg_ui::{Button, ButtonSize, ButtonVariant, FormField, TvIcon};

#[component]
pub fn Login(from: String) -> Element {
    let auth = store::AUTH();
    let nav = navigator();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);

    let target = from.clone();
    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let username = username();
        let password = password();
        if username.trim().is_empty() || password.is_empty() {
            return;
        }
        let target = target.clone();
        spawn(async move {
            if store::auth::login(username, password).await {
                nav.replace(login_redirect_target(&target));
            }
        });
    };

    rsx! {
        div { class: "min-h-screen flex items-center justify-center bg-gray-900 px-4",
            form {
                class: "bg-gray-800 rounded-lg p-8 w-full max-w-sm",
                onsubmit: submit,
                div { class: "flex items-center gap-2 mb-6",
                    TvIcon { class: "w-6 h-6 text-indigo-400" }
                    h1 { class: "text-xl font-bold text-white", "OMG Playlist Manager" }
                }
                FormField {
                    label: "Username",
                    value: username(),
                    on_input: move |v| username.set(v),
                }
                FormField {
                    label: "Password",
                    r#type: "password",
                    value: password(),
                    on_input: move |v| password.set(v),
                }
                if let Some(error) = auth.error.clone() {
                    p { class: "text-sm text-red-400 mb-3", "{error}" }
                }
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Medium,
                    r#type: Some("submit"),
                    loading: auth.loading,
                    class: Some("w-full justify-center".to_string()),
                    onclick: |_| {},
                    "Sign in"
                }
            }
        }
    }
}
