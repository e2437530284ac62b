use crate::frontend::app::Route;
use crate::frontend::services::use_session;
use dioxus::prelude::*;
use dioxus_router::{navigator, use_route};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Home,
    Search,
}

#[component]
pub fn Navigation() -> Element {
    let nav = navigator();
    let route = use_route::<Route>();
    let mut session = use_session();

    let active_tab = match route {
        Route::Search {} => Tab::Search,
        _ => Tab::Home,
    };

    rsx! {
        nav { class: "navigation",
            ul { class: "nav-items",
                li {
                    class: if active_tab == Tab::Home { "nav-item active" } else { "nav-item" },
                    onclick: move |_| { nav.push(Route::Home {}); },
                    span { class: "nav-text", "Home" }
                }
                li {
                    class: if active_tab == Tab::Search { "nav-item active" } else { "nav-item" },
                    onclick: move |_| { nav.push(Route::Search {}); },
                    span { class: "nav-text", "Search" }
                }
            }
            button {
                class: "button secondary sign-out",
                onclick: move |_| session.sign_out(),
                "Sign out"
            }
        }
    }
}
