//! Session context.
//!
//! The session lives only in memory. It is created anonymous at startup,
//! filled in by the sign-in flow and cleared on sign-out.

use chrono::{DateTime, Utc};
use dioxus::prelude::*;

use crate::utils::logging::redact;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    token: Option<String>,
    signed_in_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Builds a session from a token. An empty token yields an anonymous session.
    pub fn with_token(token: impl Into<String>) -> Self {
        let token = token.into();
        if token.is_empty() {
            return Self::anonymous();
        }
        Self {
            token: Some(token),
            signed_in_at: Some(Utc::now()),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    pub fn signed_in_at(&self) -> Option<DateTime<Utc>> {
        self.signed_in_at
    }
}

/// Handle to the session signal, provided once at the application root.
#[derive(Clone, Copy)]
pub struct SessionState {
    session: Signal<Session>,
}

impl SessionState {
    pub fn new(session: Signal<Session>) -> Self {
        Self { session }
    }

    /// Snapshot of the current session. Subscribes the caller to changes.
    pub fn session(&self) -> Session {
        self.session.read().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.session.read().token().map(str::to_owned)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated()
    }

    /// Stores a token. Returns `false` and leaves the session untouched if it is empty.
    pub fn sign_in(&mut self, token: String) -> bool {
        if token.is_empty() {
            log::warn!("Ignoring sign-in with an empty token");
            return false;
        }
        log::info!("Signed in with token {}", redact(&token));
        self.session.set(Session::with_token(token));
        true
    }

    pub fn sign_out(&mut self) {
        if self.session.peek().is_authenticated() {
            log::info!("Signed out");
        }
        self.session.set(Session::anonymous());
    }
}

/// Returns the session handle from context.
pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}
