//! Presentation layer - Dioxus UI components and service hooks

pub mod components;
pub mod services;

pub use services::Services;
