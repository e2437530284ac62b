use crate::frontend::app::Route;
use crate::frontend::components::common::Logo;
use crate::frontend::components::guard::RequireAuth;
use crate::frontend::components::layout::Navigation;
use dioxus::prelude::*;
use dioxus_router::components::Outlet;

/// Layout for every route that needs a signed-in user.
#[component]
pub fn Protected() -> Element {
    rsx! {
        RequireAuth {
            Layout {}
        }
    }
}

#[component]
pub fn Layout() -> Element {
    rsx! {
        div { class: "app-shell",
            header { class: "app-header",
                Logo {}
                Navigation {}
            }
            main { class: "app-content",
                Outlet::<Route> {}
            }
        }
    }
}
