//! Wire types exchanged with the recommendation backend

use serde::{Deserialize, Deserializer, Serialize};

use crate::value_objects::{Mood, PopularityBias, ReleaseYear, WatchingContext};

/// Body of `POST /recommend`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub favorite_movie: String,
    pub favorite_genres: Vec<String>,
    pub current_mood: Mood,
    pub watching_context: WatchingContext,
    pub popularity_bias: PopularityBias,
}

/// A single recommended movie or series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    pub title: String,
    #[serde(default)]
    pub year: ReleaseYear,
    #[serde(default)]
    pub popularity: Option<f64>,
}

impl MediaItem {
    pub fn new(title: impl Into<String>, year: i64, popularity: f64) -> Self {
        Self {
            title: title.into(),
            year: ReleaseYear::Number(year),
            popularity: Some(popularity),
        }
    }

    /// Popularity rounded to one decimal place, `"N/A"` when absent
    pub fn popularity_label(&self) -> String {
        match self.popularity {
            Some(p) if p.is_finite() => format!("{:.1}", p),
            _ => "N/A".to_string(),
        }
    }
}

/// Response body of `POST /recommend`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecommendationResult {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub movies: Vec<MediaItem>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tv: Vec<MediaItem>,
}

/// A list sent as `null` counts as no entries
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<MediaItem>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<MediaItem>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl RecommendationResult {
    /// True when neither list has an entry
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty() && self.tv.is_empty()
    }
}
