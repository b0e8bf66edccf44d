//! Presentational components
//!
//! Pure functions of their props: no internal state and no failure modes.

pub mod genre_suggestions;
pub mod labeled_input;
pub mod labeled_select;
pub mod results_column;
pub mod status;

pub use genre_suggestions::GenreSuggestions;
pub use labeled_input::LabeledInput;
pub use labeled_select::LabeledSelect;
pub use results_column::{MediaCard, ResultsColumn};
pub use status::{ErrorBanner, LoadingIndicator, StatusPanel};
