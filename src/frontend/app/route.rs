use crate::frontend::components::layout::Protected;
use crate::frontend::pages::{Entry, Home, NotFound, Search};

use dioxus::prelude::*;
use dioxus_router::Routable;

/// Main routing enum for the application.
#[derive(Clone, Routable, Debug, PartialEq, Eq)]
#[rustfmt::skip]
pub enum Route {
    /// Entry page; also where unauthenticated visitors are sent.
    #[route("/")]
    Entry {},
    #[layout(Protected)]
        /// Landing page after sign-in.
        #[route("/home")]
        Home {},
        /// Search form with reference filters and saved presets.
        #[route("/search")]
        Search {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
