//! CineMatch player crate.
//!
//! This crate contains the UI, the application service, and the HTTP
//! adapter for the recommendation backend. Desktop and web builds are
//! selected at compile time via `cfg`.

pub mod application;
pub mod config;
pub mod infrastructure;
pub mod ports;
pub mod ui;

pub use ui::presentation;
pub use ui::routes;

// Re-export commonly used entrypoints
pub use ui::app;
pub use ui::Route;
