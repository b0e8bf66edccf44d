//! Viewer preference value objects
//!
//! - Mood: how the viewer feels right now
//! - WatchingContext: who the viewer is watching with
//! - PopularityBias: mainstream vs. lesser-known results
//!
//! All three serialize to the lowercase wire values the recommendation
//! backend expects.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::DomainError;

/// A closed set of options that can be offered in a select control.
pub trait Choice: Copy + Sized + 'static {
    /// All values, in display order
    fn all() -> &'static [Self];

    /// Wire value sent to the backend
    fn value(&self) -> &'static str;

    /// Human-readable label
    fn label(&self) -> &'static str;

    /// `(value, label)` pairs for every option, in display order
    fn options() -> Vec<(&'static str, &'static str)> {
        Self::all().iter().map(|c| (c.value(), c.label())).collect()
    }
}

/// Current mood of the viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    #[default]
    Happy,
    Excited,
    Romantic,
    Sad,
    Scared,
}

impl Choice for Mood {
    fn all() -> &'static [Mood] {
        &[
            Mood::Happy,
            Mood::Excited,
            Mood::Romantic,
            Mood::Sad,
            Mood::Scared,
        ]
    }

    fn value(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Excited => "excited",
            Mood::Romantic => "romantic",
            Mood::Sad => "sad",
            Mood::Scared => "scared",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Excited => "Excited",
            Mood::Romantic => "Romantic",
            Mood::Sad => "Sad",
            Mood::Scared => "Scared",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl std::str::FromStr for Mood {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "happy" => Ok(Mood::Happy),
            "excited" => Ok(Mood::Excited),
            "romantic" => Ok(Mood::Romantic),
            "sad" => Ok(Mood::Sad),
            "scared" => Ok(Mood::Scared),
            _ => Err(DomainError::parse(format!("Unknown mood: {}", s))),
        }
    }
}

/// Who the viewer is watching with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WatchingContext {
    #[default]
    Alone,
    Friends,
    Partner,
    Family,
}

impl Choice for WatchingContext {
    fn all() -> &'static [WatchingContext] {
        &[
            WatchingContext::Alone,
            WatchingContext::Friends,
            WatchingContext::Partner,
            WatchingContext::Family,
        ]
    }

    fn value(&self) -> &'static str {
        match self {
            WatchingContext::Alone => "alone",
            WatchingContext::Friends => "friends",
            WatchingContext::Partner => "partner",
            WatchingContext::Family => "family",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            WatchingContext::Alone => "Watching alone",
            WatchingContext::Friends => "Watching with friends",
            WatchingContext::Partner => "Watching with my partner",
            WatchingContext::Family => "Watching with family",
        }
    }
}

impl fmt::Display for WatchingContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl std::str::FromStr for WatchingContext {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "alone" => Ok(WatchingContext::Alone),
            "friends" => Ok(WatchingContext::Friends),
            "partner" => Ok(WatchingContext::Partner),
            "family" => Ok(WatchingContext::Family),
            _ => Err(DomainError::parse(format!("Unknown watching context: {}", s))),
        }
    }
}

/// Preference between mainstream and lesser-known titles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PopularityBias {
    #[default]
    Popular,
    Underrated,
    Mix,
}

impl Choice for PopularityBias {
    fn all() -> &'static [PopularityBias] {
        &[
            PopularityBias::Popular,
            PopularityBias::Underrated,
            PopularityBias::Mix,
        ]
    }

    fn value(&self) -> &'static str {
        match self {
            PopularityBias::Popular => "popular",
            PopularityBias::Underrated => "underrated",
            PopularityBias::Mix => "mix",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            PopularityBias::Popular => "Popular picks",
            PopularityBias::Underrated => "Hidden gems",
            PopularityBias::Mix => "A bit of both",
        }
    }
}

impl fmt::Display for PopularityBias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl std::str::FromStr for PopularityBias {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "popular" => Ok(PopularityBias::Popular),
            "underrated" => Ok(PopularityBias::Underrated),
            "mix" => Ok(PopularityBias::Mix),
            _ => Err(DomainError::parse(format!("Unknown popularity bias: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_value_round_trips_through_from_str() {
        for mood in Mood::all() {
            assert_eq!(Mood::from_str(mood.value()).unwrap(), *mood);
        }
        for ctx in WatchingContext::all() {
            assert_eq!(WatchingContext::from_str(ctx.value()).unwrap(), *ctx);
        }
        for bias in PopularityBias::all() {
            assert_eq!(PopularityBias::from_str(bias.value()).unwrap(), *bias);
        }
    }

    #[test]
    fn test_from_str_ignores_case_and_whitespace() {
        assert_eq!(Mood::from_str("  Scared ").unwrap(), Mood::Scared);
        assert_eq!(
            WatchingContext::from_str("FRIENDS").unwrap(),
            WatchingContext::Friends
        );
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = Mood::from_str("grumpy").unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
        assert!(PopularityBias::from_str("").is_err());
    }

    #[test]
    fn test_serializes_to_wire_values() {
        assert_eq!(serde_json::to_string(&Mood::Romantic).unwrap(), "\"romantic\"");
        assert_eq!(
            serde_json::to_string(&WatchingContext::Partner).unwrap(),
            "\"partner\""
        );
        assert_eq!(serde_json::to_string(&PopularityBias::Mix).unwrap(), "\"mix\"");
    }

    #[test]
    fn test_options_keep_display_order() {
        let options = Mood::options();
        assert_eq!(options.len(), 5);
        assert_eq!(options[0], ("happy", "Happy"));
        assert_eq!(options[4], ("scared", "Scared"));
    }

    #[test]
    fn test_defaults_are_first_option() {
        assert_eq!(Mood::default(), Mood::all()[0]);
        assert_eq!(WatchingContext::default(), WatchingContext::all()[0]);
        assert_eq!(PopularityBias::default(), PopularityBias::all()[0]);
    }
}
