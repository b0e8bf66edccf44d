//! Application layer: services and their error types

pub mod error;
pub mod services;

pub use error::RecommendationError;
