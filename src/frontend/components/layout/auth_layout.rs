use crate::frontend::components::common::Logo;
use dioxus::prelude::*;

#[component]
pub fn AuthLayout(children: Element) -> Element {
    rsx! {
        div { class: "auth-container",
            Logo {}
            {children}
        }
    }
}
