//! Application services

mod recommendation_service;

pub use recommendation_service::RecommendationService;
