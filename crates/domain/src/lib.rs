//! CineMatch domain: the recommendation form, the payloads exchanged with
//! the recommendation backend, and the request lifecycle.
//!
//! This crate has no UI and performs no I/O.

pub mod error;
pub mod form;
pub mod recommendation;
pub mod status;
pub mod value_objects;

pub use error::DomainError;
pub use form::{FormField, FormInput};
pub use recommendation::{MediaItem, RecommendationRequest, RecommendationResult};
pub use status::RequestStatus;
pub use value_objects::{
    append_genre, join_genres, parse_genres, Choice, Mood, PopularityBias, ReleaseYear,
    WatchingContext, KNOWN_GENRES,
};
