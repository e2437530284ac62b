//! Frontend module for the `timnha` application.

pub mod app;
pub mod assets;
pub mod components;
pub mod pages;
pub mod services;
