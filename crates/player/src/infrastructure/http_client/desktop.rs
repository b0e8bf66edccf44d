//! Desktop HTTP adapter using reqwest

use async_trait::async_trait;
use reqwest::Client;

use cinematch_domain::{RecommendationRequest, RecommendationResult};

use crate::config::PlayerConfig;
use crate::ports::outbound::{ApiError, RecommendationPort};

/// Client for the recommendation backend's `POST /recommend`
#[derive(Clone)]
pub struct HttpRecommendationClient {
    client: Client,
    endpoint: String,
}

impl HttpRecommendationClient {
    pub fn new(config: &PlayerConfig) -> Self {
        // No timeout: a slow backend is waited on until it answers.
        Self {
            client: Client::new(),
            endpoint: config.recommend_endpoint(),
        }
    }
}

fn classify_send_error(e: reqwest::Error) -> ApiError {
    if e.is_builder() {
        ApiError::Request(e.to_string())
    } else {
        ApiError::Transport(e.to_string())
    }
}

#[async_trait]
impl RecommendationPort for HttpRecommendationClient {
    async fn recommend(
        &self,
        request: RecommendationRequest,
    ) -> Result<RecommendationResult, ApiError> {
        tracing::debug!(endpoint = %self.endpoint, "POST recommendation request");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(classify_send_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::status(status.as_u16(), body));
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
