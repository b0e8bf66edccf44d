//! User-facing recommendation errors
//!
//! Every failure is recovered on the recommendation page and shown in the
//! same banner; only the message differs.

use thiserror::Error;

use crate::ports::outbound::ApiError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecommendationError {
    /// The backend could not be reached
    #[error(
        "Cannot connect to server. Make sure the recommendation service is running at {endpoint}."
    )]
    CannotConnect { endpoint: String },

    /// The backend answered with a non-success status
    #[error("The server encountered an issue. Please try again later.")]
    Server,

    /// The backend answered successfully but recommended nothing
    #[error("No recommendations available for these preferences. Try different genres or another mood.")]
    NoResults,

    /// Anything else
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

impl RecommendationError {
    /// Classify a transport error by its kind.
    pub fn from_api_error(error: &ApiError, endpoint: &str) -> Self {
        match error {
            ApiError::Transport(_) => RecommendationError::CannotConnect {
                endpoint: endpoint.to_string(),
            },
            ApiError::Status { .. } => RecommendationError::Server,
            other => RecommendationError::Unexpected(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENDPOINT: &str = "http://localhost:8000/recommend";

    #[test]
    fn test_transport_maps_to_cannot_connect() {
        let err = RecommendationError::from_api_error(
            &ApiError::transport("error sending request"),
            ENDPOINT,
        );
        assert_eq!(
            err,
            RecommendationError::CannotConnect {
                endpoint: ENDPOINT.to_string()
            }
        );
        assert!(err.to_string().contains("Cannot connect to server"));
        assert!(err.to_string().contains(ENDPOINT));
    }

    #[test]
    fn test_status_maps_to_server_without_body() {
        let err = RecommendationError::from_api_error(
            &ApiError::status(500, "Traceback: KeyError 'genres'"),
            ENDPOINT,
        );
        assert_eq!(err, RecommendationError::Server);
        assert!(!err.to_string().contains("Traceback"));
    }

    #[test]
    fn test_other_errors_are_unexpected() {
        let err = RecommendationError::from_api_error(
            &ApiError::Decode("expected value at line 1 column 1".into()),
            ENDPOINT,
        );
        assert!(matches!(err, RecommendationError::Unexpected(_)));
        assert!(err
            .to_string()
            .starts_with("An unexpected error occurred: "));
        assert!(err.to_string().contains("expected value"));
    }

    #[test]
    fn test_classification_ignores_message_text() {
        // A decode failure mentioning "fetch" is still not a connection failure
        let err = RecommendationError::from_api_error(
            &ApiError::Decode("Failed to fetch".into()),
            ENDPOINT,
        );
        assert!(matches!(err, RecommendationError::Unexpected(_)));
    }
}
