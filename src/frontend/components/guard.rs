//! Authentication guard for protected routes.

use dioxus::prelude::*;
use dioxus_router::navigator;

use crate::frontend::app::Route;
use crate::frontend::services::{Session, use_session};

/// What the guard does for a given session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    /// Replace the current history entry with this route.
    Redirect(Route),
}

impl GuardDecision {
    pub fn evaluate(session: &Session) -> Self {
        if session.is_authenticated() {
            Self::Render
        } else {
            Self::Redirect(Route::Entry {})
        }
    }
}

/// Renders `children` only when a session token is present; otherwise
/// replaces the current route with the entry page.
#[component]
pub fn RequireAuth(children: Element) -> Element {
    let nav = navigator();

    rsx! {
        AuthGate {
            on_redirect: move |target: Route| {
                nav.replace(target);
            },
            {children}
        }
    }
}

/// Router-independent part of [`RequireAuth`]: decides from the session and
/// hands redirects to `on_redirect` instead of rendering `children`.
#[component]
pub fn AuthGate(on_redirect: EventHandler<Route>, children: Element) -> Element {
    let session = use_session();

    match GuardDecision::evaluate(&session.session()) {
        GuardDecision::Render => children,
        GuardDecision::Redirect(target) => {
            log::info!("No session, redirecting to {target}");
            on_redirect.call(target);
            rsx! {}
        }
    }
}
