//! Request lifecycle for the recommendation page
//!
//! ```text
//! Idle ──begin──▶ Loading ──resolve──▶ Success | Error
//!                    ▲                      │
//!                    └────────begin─────────┘
//! ```
//!
//! Loading never returns to Idle, and a second `begin` while Loading is
//! rejected so at most one request is in flight.

use std::fmt::Display;

use crate::recommendation::RecommendationResult;
use crate::DomainError;

/// Lifecycle of the most recent recommendation request
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestStatus {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// Request in flight
    Loading,
    /// Last request failed; holds the user-facing message
    Error(String),
    /// Last request produced recommendations
    Success(RecommendationResult),
}

impl RequestStatus {
    /// Start a new submission. Clears any previous error or result.
    pub fn begin(&self) -> Result<Self, DomainError> {
        match self {
            RequestStatus::Loading => Err(DomainError::invalid_transition(
                "a recommendation request is already in flight",
            )),
            _ => Ok(RequestStatus::Loading),
        }
    }

    /// Settle the in-flight request with its outcome.
    pub fn resolve<E: Display>(
        &self,
        outcome: Result<RecommendationResult, E>,
    ) -> Result<Self, DomainError> {
        if !self.is_loading() {
            return Err(DomainError::invalid_transition(format!(
                "cannot resolve a request from {}",
                self.name()
            )));
        }
        Ok(match outcome {
            Ok(result) => RequestStatus::Success(result),
            Err(e) => RequestStatus::Error(e.to_string()),
        })
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RequestStatus::Loading)
    }

    /// Submit control is non-interactive while a request is in flight
    pub fn submit_disabled(&self) -> bool {
        self.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestStatus::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&RecommendationResult> {
        match self {
            RequestStatus::Success(result) => Some(result),
            _ => None,
        }
    }

    /// Short state name for logs
    pub fn name(&self) -> &'static str {
        match self {
            RequestStatus::Idle => "idle",
            RequestStatus::Loading => "loading",
            RequestStatus::Error(_) => "error",
            RequestStatus::Success(_) => "success",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendation::MediaItem;

    fn sample_result() -> RecommendationResult {
        RecommendationResult {
            movies: vec![MediaItem::new("Inception", 2010, 8.8)],
            tv: vec![],
        }
    }

    #[test]
    fn test_idle_by_default() {
        let status = RequestStatus::default();
        assert_eq!(status, RequestStatus::Idle);
        assert!(!status.submit_disabled());
        assert!(status.error().is_none());
        assert!(status.result().is_none());
    }

    #[test]
    fn test_begin_then_success() {
        let loading = RequestStatus::Idle.begin().unwrap();
        assert!(loading.is_loading());
        assert!(loading.submit_disabled());

        let done = loading.resolve::<String>(Ok(sample_result())).unwrap();
        assert_eq!(done.result(), Some(&sample_result()));
        assert!(done.error().is_none());
        assert!(!done.submit_disabled());
    }

    #[test]
    fn test_begin_then_error() {
        let done = RequestStatus::Idle
            .begin()
            .unwrap()
            .resolve(Err("Cannot connect"))
            .unwrap();
        assert_eq!(done.error(), Some("Cannot connect"));
        assert!(done.result().is_none());
        assert!(!done.is_loading());
    }

    #[test]
    fn test_resubmit_clears_previous_outcome() {
        let failed = RequestStatus::Error("boom".to_string());
        let loading = failed.begin().unwrap();
        assert_eq!(loading, RequestStatus::Loading);

        let succeeded = RequestStatus::Success(sample_result());
        assert_eq!(succeeded.begin().unwrap(), RequestStatus::Loading);
    }

    #[test]
    fn test_begin_while_loading_is_rejected() {
        let err = RequestStatus::Loading.begin().unwrap_err();
        assert!(matches!(err, DomainError::InvalidTransition(_)));
    }

    #[test]
    fn test_resolve_outside_loading_is_rejected() {
        let err = RequestStatus::Idle
            .resolve::<String>(Ok(sample_result()))
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidTransition(_)));
        assert!(RequestStatus::Error("x".into())
            .resolve(Err("y"))
            .is_err());
    }
}
