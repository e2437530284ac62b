use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Inline status message.
#[component]
pub fn Notice(kind: NoticeKind, #[props(into)] message: String) -> Element {
    let class = match kind {
        NoticeKind::Info => "notice info",
        NoticeKind::Error => "notice error",
    };

    rsx! {
        p { class: "{class}", role: "status", "{message}" }
    }
}
