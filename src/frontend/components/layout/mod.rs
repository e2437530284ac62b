//! Layout components.

pub mod auth_layout;
pub mod main;
pub mod navigation;

pub use auth_layout::AuthLayout;
pub use main::Protected;
pub use navigation::Navigation;
