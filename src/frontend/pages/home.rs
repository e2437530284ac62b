//! Landing page after sign-in.

use crate::backend::models::reference::property_types;
use crate::frontend::app::Route;
use crate::frontend::services::use_session;
use chrono::Local;
use dioxus::prelude::*;
use dioxus_router::components::Link;

#[component]
pub fn Home() -> Element {
    let session = use_session().session();
    let since = session
        .signed_in_at()
        .map(|t| t.with_timezone(&Local).format("%H:%M %d/%m/%Y").to_string());

    rsx! {
        section { class: "page home",
            h1 { "Find your next home" }
            if let Some(since) = since {
                p { class: "muted", "Signed in since {since}" }
            }
            div { class: "quick-links",
                for kind in property_types() {
                    Link { key: "{kind.id}", class: "chip", to: Route::Search {}, "{kind.name}" }
                }
            }
            Link { class: "button primary", to: Route::Search {}, "Start a search" }
        }
    }
}
