//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to talk to the recommendation backend without
//! depending on a concrete HTTP client.

pub mod api_error;
pub mod recommendation_port;

pub use api_error::ApiError;
#[cfg(any(test, feature = "testing"))]
pub use recommendation_port::MockRecommendationPort;
pub use recommendation_port::RecommendationPort;
