//! Frontend services for state shared across pages.

pub mod session;

pub use session::{Session, SessionState, use_session};
