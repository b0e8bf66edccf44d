//! Recommendation form record
//!
//! `FormInput` is immutable: every edit produces a new record with exactly
//! one field replaced, keyed by `FormField`.

use std::fmt;

use crate::recommendation::RecommendationRequest;
use crate::value_objects::{parse_genres, Mood, PopularityBias, WatchingContext};
use crate::DomainError;

/// User input collected by the recommendation form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormInput {
    pub favorite_movie: String,
    /// Raw comma-separated text, exactly as typed
    pub favorite_genres: String,
    pub current_mood: Mood,
    pub watching_context: WatchingContext,
    pub popularity_bias: PopularityBias,
}

/// Editable fields of the form, named as on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    FavoriteMovie,
    FavoriteGenres,
    CurrentMood,
    WatchingContext,
    PopularityBias,
}

impl FormField {
    /// Field name, also used as the input's `name` attribute
    pub fn name(&self) -> &'static str {
        match self {
            FormField::FavoriteMovie => "favorite_movie",
            FormField::FavoriteGenres => "favorite_genres",
            FormField::CurrentMood => "current_mood",
            FormField::WatchingContext => "watching_context",
            FormField::PopularityBias => "popularity_bias",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FormInput {
    /// Return a copy of this record with `field` set to `value`.
    ///
    /// Text fields take the value verbatim; select fields must parse.
    pub fn with_field(&self, field: FormField, value: &str) -> Result<Self, DomainError> {
        let mut next = self.clone();
        match field {
            FormField::FavoriteMovie => next.favorite_movie = value.to_string(),
            FormField::FavoriteGenres => next.favorite_genres = value.to_string(),
            FormField::CurrentMood => next.current_mood = value.parse()?,
            FormField::WatchingContext => next.watching_context = value.parse()?,
            FormField::PopularityBias => next.popularity_bias = value.parse()?,
        }
        Ok(next)
    }

    /// Build the request payload sent on submit
    pub fn to_request(&self) -> RecommendationRequest {
        RecommendationRequest {
            favorite_movie: self.favorite_movie.clone(),
            favorite_genres: parse_genres(&self.favorite_genres),
            current_mood: self.current_mood,
            watching_context: self.watching_context,
            popularity_bias: self.popularity_bias,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_field_replaces_only_that_field() {
        let form = FormInput::default();
        let next = form
            .with_field(FormField::FavoriteMovie, "Inception")
            .unwrap();

        assert_eq!(next.favorite_movie, "Inception");
        assert_eq!(next.favorite_genres, form.favorite_genres);
        assert_eq!(next.current_mood, form.current_mood);
        // Original record is untouched
        assert_eq!(form.favorite_movie, "");
    }

    #[test]
    fn test_with_field_parses_select_values() {
        let form = FormInput::default()
            .with_field(FormField::CurrentMood, "scared")
            .and_then(|f| f.with_field(FormField::WatchingContext, "partner"))
            .and_then(|f| f.with_field(FormField::PopularityBias, "underrated"))
            .unwrap();

        assert_eq!(form.current_mood, Mood::Scared);
        assert_eq!(form.watching_context, WatchingContext::Partner);
        assert_eq!(form.popularity_bias, PopularityBias::Underrated);
    }

    #[test]
    fn test_with_field_rejects_unknown_select_value() {
        let err = FormInput::default()
            .with_field(FormField::CurrentMood, "bored")
            .unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
    }

    #[test]
    fn test_field_names_match_request_keys() {
        assert_eq!(FormField::FavoriteMovie.name(), "favorite_movie");
        assert_eq!(FormField::PopularityBias.to_string(), "popularity_bias");
    }

    #[test]
    fn test_genre_text_is_kept_verbatim() {
        let form = FormInput::default()
            .with_field(FormField::FavoriteGenres, "Drama, ")
            .unwrap();
        assert_eq!(form.favorite_genres, "Drama, ");
        assert_eq!(form.to_request().favorite_genres, vec!["Drama"]);
    }

    #[test]
    fn test_to_request_splits_genres() {
        let form = FormInput {
            favorite_movie: "Alien".to_string(),
            favorite_genres: " Sci-Fi ,  , Thriller,".to_string(),
            ..FormInput::default()
        };

        let request = form.to_request();
        assert_eq!(request.favorite_movie, "Alien");
        assert_eq!(request.favorite_genres, vec!["Sci-Fi", "Thriller"]);
        assert_eq!(request.current_mood, Mood::Happy);
    }
}
