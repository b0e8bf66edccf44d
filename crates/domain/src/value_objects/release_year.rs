//! Release year as sent by the recommendation backend

use serde::{Deserialize, Serialize};
use std::fmt;

/// Release year of a media item.
///
/// The backend may send a JSON number (`2010`) or a string (`"2010"`,
/// `"N/A"` when unknown). Both decode; both render as plain text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReleaseYear {
    Number(i64),
    Text(String),
}

impl Default for ReleaseYear {
    fn default() -> Self {
        ReleaseYear::Text("N/A".to_string())
    }
}

impl fmt::Display for ReleaseYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseYear::Number(year) => write!(f, "{}", year),
            ReleaseYear::Text(text) => write!(f, "{}", text),
        }
    }
}

impl From<i64> for ReleaseYear {
    fn from(year: i64) -> Self {
        ReleaseYear::Number(year)
    }
}
