//! Utility modules for the application backend.

/// Runtime configuration.
pub mod config;
/// Path utilities for the application directory.
pub mod paths;
