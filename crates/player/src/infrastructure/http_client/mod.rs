//! HTTP adapter for the recommendation backend
//!
//! The correct client is selected at compile time based on the target
//! architecture: reqwest on desktop, browser fetch (gloo-net) on wasm.

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
mod desktop;

#[cfg(target_arch = "wasm32")]
pub use wasm::HttpRecommendationClient;

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::HttpRecommendationClient;
