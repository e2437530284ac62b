//! Entry page: sign-in form, and the target of every auth redirect.

use crate::backend::api::{ApiClient, Credentials};
use crate::frontend::app::Route;
use crate::frontend::components::common::{Notice, NoticeKind};
use crate::frontend::components::layout::AuthLayout;
use crate::frontend::services::use_session;
use dioxus::{events::KeyboardEvent, prelude::*};
use dioxus_router::navigator;

#[component]
pub fn Entry() -> Element {
    let nav = navigator();
    let mut session = use_session();
    let api = use_context::<ApiClient>();
    let mut phone = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut pending = use_signal(|| false);

    let submit = use_callback(move |()| {
        if pending() {
            return;
        }
        let credentials = Credentials::new(phone(), password());
        if let Err(msg) = credentials.validate() {
            error.set(Some(msg.to_string()));
            return;
        }

        let api = api.clone();
        error.set(None);
        pending.set(true);
        spawn(async move {
            let result = api.login(&credentials).await;
            pending.set(false);
            match result {
                Ok(token) => {
                    if session.sign_in(token) {
                        nav.replace(Route::Home {});
                    }
                }
                Err(e) => {
                    log::warn!("Sign-in failed: {e}");
                    error.set(Some(e.to_string()));
                }
            }
        });
    });

    let on_keydown = move |e: KeyboardEvent| {
        if e.key() == Key::Enter {
            submit(());
        }
    };

    if session.is_authenticated() {
        nav.replace(Route::Home {});
        return rsx! {};
    }

    rsx! {
        AuthLayout {
            div { class: "auth-card",
                h1 { class: "welcome-text", "Find your next home" }
                label { class: "field",
                    span { "Phone number" }
                    input {
                        r#type: "tel",
                        value: "{phone}",
                        maxlength: "14",
                        placeholder: "0901 234 567",
                        oninput: move |e| phone.set(e.value()),
                        onkeydown: on_keydown,
                        autofocus: true,
                    }
                }
                label { class: "field",
                    span { "Password" }
                    input {
                        r#type: "password",
                        value: "{password}",
                        oninput: move |e| password.set(e.value()),
                        onkeydown: on_keydown,
                    }
                }
                if let Some(message) = error() {
                    Notice { kind: NoticeKind::Error, message }
                }
                button {
                    class: "button primary",
                    disabled: pending(),
                    onclick: move |_| submit(()),
                    if pending() { "Signing in..." } else { "Sign in" }
                }
            }
        }
    }
}
