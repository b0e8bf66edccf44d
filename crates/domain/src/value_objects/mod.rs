//! Value objects for the recommendation form and its results

mod genres;
mod preferences;
mod release_year;

pub use genres::{append_genre, join_genres, parse_genres, KNOWN_GENRES};
pub use preferences::{Choice, Mood, PopularityBias, WatchingContext};
pub use release_year::ReleaseYear;
