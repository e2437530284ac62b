//! Logo component.

use crate::backend::utils::config::AppConfig;
use crate::frontend::app::Route;
use dioxus::prelude::*;
use dioxus_router::components::Link;

#[component]
pub fn Logo() -> Element {
    let config = use_context::<AppConfig>();

    rsx! {
        Link { class: "logo", to: Route::Home {},
            span { class: "logo-mark", "⌂" }
            span { class: "logo-name", "{config.app_name}" }
        }
    }
}
