//! Result column: a heading and one card per media item

use cinematch_domain::MediaItem;
use dioxus::prelude::*;

#[component]
pub fn ResultsColumn(#[props(into)] title: String, items: Vec<MediaItem>) -> Element {
    rsx! {
        section {
            class: "results-column",
            h2 { class: "results-title", "{title}" }

            if items.is_empty() {
                p { class: "results-empty", "No results found" }
            } else {
                ul {
                    class: "results-list",
                    for (index, item) in items.iter().enumerate() {
                        MediaCard { key: "{index}", item: item.clone() }
                    }
                }
            }
        }
    }
}

/// Title, year, and popularity of one recommendation
#[component]
pub fn MediaCard(item: MediaItem) -> Element {
    let popularity = item.popularity_label();

    rsx! {
        li {
            class: "media-card",
            h3 { class: "media-title", "{item.title}" }
            div {
                class: "media-meta",
                span { class: "media-year", "{item.year}" }
                span {
                    class: "media-popularity",
                    title: "Popularity",
                    "★ {popularity}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_shows_title_year_and_rounded_popularity() {
        let html = dioxus_ssr::render_element(rsx! {
            MediaCard { item: MediaItem::new("Inception", 2010, 8.8) }
        });

        assert!(html.contains("Inception"));
        assert!(html.contains("2010"));
        assert!(html.contains("8.8"));
    }

    #[test]
    fn empty_column_shows_placeholder() {
        let html = dioxus_ssr::render_element(rsx! {
            ResultsColumn { title: "TV Shows", items: Vec::new() }
        });

        assert!(html.contains("TV Shows"));
        assert!(html.contains("No results found"));
        assert!(!html.contains("media-card"));
    }

    #[test]
    fn column_lists_every_item() {
        let items = vec![
            MediaItem::new("Arrival", 2016, 41.2),
            MediaItem::new("Alien", 1979, 35.04),
        ];
        let html = dioxus_ssr::render_element(rsx! {
            ResultsColumn { title: "Movies", items: items }
        });

        assert_eq!(html.matches("class=\"media-card\"").count(), 2);
        assert!(html.contains("35.0"));
        assert!(!html.contains("No results found"));
    }
}
