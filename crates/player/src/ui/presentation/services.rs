//! Service providers for the presentation layer
//!
//! This module provides Dioxus context providers for application services.
//! Components can use `use_context` to access services without depending
//! on infrastructure implementations.
use dioxus::prelude::*;
use std::sync::Arc;

use crate::application::services::RecommendationService;
use crate::ports::outbound::RecommendationPort;

/// All services wrapped for context provision
#[derive(Clone)]
pub struct Services {
    pub recommendation: Arc<RecommendationService>,
}

impl Services {
    /// Create all services with the given ports
    pub fn new(recommendations: Arc<dyn RecommendationPort>) -> Self {
        Self {
            recommendation: Arc::new(RecommendationService::new(recommendations)),
        }
    }
}

/// Hook to access the RecommendationService from context
pub fn use_recommendation_service() -> Arc<RecommendationService> {
    let services = use_context::<Services>();
    services.recommendation.clone()
}
