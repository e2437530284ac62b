//! Application routing system.

pub mod route;

pub use route::Route;
