//! Recommendation Port - boundary to the recommendation backend
//!
//! Note: uses `async_trait` rather than returning `Pin<Box<dyn Future>>`
//! for mockall compatibility. Futures are `?Send` on wasm, where the
//! browser fetch API is single-threaded.

use async_trait::async_trait;
use cinematch_domain::{RecommendationRequest, RecommendationResult};

use super::ApiError;

/// Port for fetching recommendations
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait RecommendationPort: Send + Sync {
    /// Send one recommendation request and decode the response.
    ///
    /// No timeout and no retry: the call waits until the backend answers
    /// or the transport fails.
    async fn recommend(
        &self,
        request: RecommendationRequest,
    ) -> Result<RecommendationResult, ApiError>;

    /// Full URL requests are sent to, for user-facing messages
    fn endpoint(&self) -> String;
}
