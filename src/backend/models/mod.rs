//! Data shapes shared by the UI and the API client.

pub mod marker;
pub mod preset;
pub mod reference;

pub use preset::{PreferencePreset, SearchCriteria};
