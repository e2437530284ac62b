//! UI components and layouts.

pub mod common;
pub mod guard;
pub mod layout;
