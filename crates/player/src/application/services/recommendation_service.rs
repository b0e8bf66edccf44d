//! Recommendation service
//!
//! Turns the form into a request, sends it through the `RecommendationPort`,
//! and maps every outcome onto either a non-empty result or a
//! `RecommendationError` the page can display.

use std::sync::Arc;

use cinematch_domain::{FormInput, RecommendationResult};

use crate::application::error::RecommendationError;
use crate::ports::outbound::RecommendationPort;

#[derive(Clone)]
pub struct RecommendationService {
    port: Arc<dyn RecommendationPort>,
}

impl RecommendationService {
    pub fn new(port: Arc<dyn RecommendationPort>) -> Self {
        Self { port }
    }

    /// Submit the form once.
    ///
    /// A successful response with no movies and no series is reported as
    /// `RecommendationError::NoResults`.
    pub async fn recommend(
        &self,
        form: &FormInput,
    ) -> Result<RecommendationResult, RecommendationError> {
        let request = form.to_request();
        tracing::info!(
            genres = request.favorite_genres.len(),
            mood = %request.current_mood,
            context = %request.watching_context,
            bias = %request.popularity_bias,
            "Requesting recommendations"
        );

        match self.port.recommend(request).await {
            Ok(result) if result.is_empty() => {
                tracing::info!("Backend returned no recommendations");
                Err(RecommendationError::NoResults)
            }
            Ok(result) => {
                tracing::info!(
                    movies = result.movies.len(),
                    tv = result.tv.len(),
                    "Received recommendations"
                );
                Ok(result)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Recommendation request failed");
                Err(RecommendationError::from_api_error(&e, &self.port.endpoint()))
            }
        }
    }
}
