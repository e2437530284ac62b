use crate::frontend::app::Route;
use dioxus::prelude::*;
use dioxus_router::components::Link;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    log::debug!("Unknown route /{path}");

    rsx! {
        section { class: "page not-found",
            h1 { "Page not found" }
            p { class: "muted", "Nothing lives at /{path}." }
            Link { class: "button secondary", to: Route::Entry {}, "Back to start" }
        }
    }
}
