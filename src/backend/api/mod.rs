//! Remote API access.

pub mod client;
pub mod error;

pub use client::{ApiClient, Credentials};
pub use error::ApiError;
