//! Application pages, one per route.

pub mod entry;
pub mod home;
pub mod not_found;
pub mod search;

pub use entry::Entry;
pub use home::Home;
pub use not_found::NotFound;
pub use search::Search;
