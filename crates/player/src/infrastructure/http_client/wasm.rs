//! WASM HTTP adapter using gloo-net (browser fetch)

use async_trait::async_trait;
use gloo_net::http::Request;

use cinematch_domain::{RecommendationRequest, RecommendationResult};

use crate::config::PlayerConfig;
use crate::ports::outbound::{ApiError, RecommendationPort};

/// Client for the recommendation backend's `POST /recommend`
#[derive(Clone)]
pub struct HttpRecommendationClient {
    endpoint: String,
}

impl HttpRecommendationClient {
    pub fn new(config: &PlayerConfig) -> Self {
        Self {
            endpoint: config.recommend_endpoint(),
        }
    }
}

#[async_trait(?Send)]
impl RecommendationPort for HttpRecommendationClient {
    async fn recommend(
        &self,
        request: RecommendationRequest,
    ) -> Result<RecommendationResult, ApiError> {
        tracing::debug!(endpoint = %self.endpoint, "POST recommendation request");

        // `json` also sets `Content-Type: application/json`.
        let request = Request::post(&self.endpoint).json(&request).map_err(|e| match e {
            gloo_net::Error::SerdeError(e) => ApiError::Serialize(e.to_string()),
            other => ApiError::Request(other.to_string()),
        })?;

        // fetch() only rejects when the server could not be reached.
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::status(response.status(), body));
        }

        response
            .json::<RecommendationResult>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn endpoint(&self) -> String {
        self.endpoint.clone()
    }
}
