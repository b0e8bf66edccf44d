//! Infrastructure adapters implementing the outbound ports

pub mod http_client;

pub use http_client::HttpRecommendationClient;
