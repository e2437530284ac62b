//! Backend of the application: API access, data shapes and configuration.

pub mod api;
pub mod models;
pub mod utils;
