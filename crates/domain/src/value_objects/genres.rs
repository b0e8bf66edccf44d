//! Free-text genre list handling
//!
//! The form collects genres as one comma-separated string; the backend
//! expects an ordered list of trimmed, non-empty names.

/// Genre vocabulary understood by the recommendation backend
pub const KNOWN_GENRES: &[&str] = &[
    "Action",
    "Adventure",
    "Animation",
    "Comedy",
    "Crime",
    "Drama",
    "Fantasy",
    "Horror",
    "Mystery",
    "Romance",
    "Sci-Fi",
    "Thriller",
];

/// Split comma-separated input into trimmed, non-empty genre names.
///
/// Order is preserved and duplicates are kept; the result may be empty.
pub fn parse_genres(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Join genre names back into the form's comma-separated text.
pub fn join_genres(genres: &[String]) -> String {
    genres.join(", ")
}

/// Append `genre` to the raw genre text unless it is already listed
/// (case-insensitive). The existing text is normalized in the process.
pub fn append_genre(input: &str, genre: &str) -> String {
    let mut genres = parse_genres(input);
    let genre = genre.trim();
    if genre.is_empty() || genres.iter().any(|g| g.eq_ignore_ascii_case(genre)) {
        return join_genres(&genres);
    }
    genres.push(genre.to_string());
    join_genres(&genres)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_drops_empty_entries() {
        assert_eq!(
            parse_genres(" Sci-Fi ,  , Thriller,"),
            vec!["Sci-Fi".to_string(), "Thriller".to_string()]
        );
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_genres("").is_empty());
        assert!(parse_genres(" , ,, ").is_empty());
    }

    #[test]
    fn test_parse_preserves_order_and_duplicates() {
        assert_eq!(
            parse_genres("Drama,Comedy,Drama"),
            vec!["Drama", "Comedy", "Drama"]
        );
    }

    #[test]
    fn test_parse_is_idempotent_over_join() {
        let inputs = [
            "",
            ",",
            "Action",
            " Sci-Fi ,  , Thriller,",
            "  horror,romance  ,, ,mystery ",
            "a,b,c,d,e",
            "Science Fiction, Film Noir",
        ];
        for input in inputs {
            let once = parse_genres(input);
            let twice = parse_genres(&join_genres(&once));
            assert_eq!(once, twice, "input: {input:?}");
        }
    }

    #[test]
    fn test_append_genre_adds_new_genre() {
        assert_eq!(append_genre("Drama", "Comedy"), "Drama, Comedy");
        assert_eq!(append_genre("", "Horror"), "Horror");
    }

    #[test]
    fn test_append_genre_skips_duplicates() {
        assert_eq!(append_genre("sci-fi, Drama", "Sci-Fi"), "sci-fi, Drama");
    }

    #[test]
    fn test_known_genres_are_already_normalized() {
        for genre in KNOWN_GENRES {
            assert_eq!(parse_genres(genre), vec![genre.to_string()]);
        }
    }
}
