//! Clickable genre suggestions shown under the genre field

use cinematch_domain::KNOWN_GENRES;
use dioxus::prelude::*;

/// `selected` holds the genres already listed in the field; those chips
/// render disabled.
#[component]
pub fn GenreSuggestions(selected: Vec<String>, onpick: EventHandler<&'static str>) -> Element {
    let chips: Vec<(&'static str, &'static str, bool)> = KNOWN_GENRES
        .iter()
        .map(|genre| {
            let picked = selected.iter().any(|g| g.eq_ignore_ascii_case(genre));
            let class = if picked {
                "genre-chip genre-chip-active"
            } else {
                "genre-chip"
            };
            (*genre, class, picked)
        })
        .collect();

    rsx! {
        div {
            class: "genre-suggestions",
            for (genre, class, picked) in chips {
                button {
                    key: "{genre}",
                    r#type: "button",
                    class: "{class}",
                    disabled: picked,
                    onclick: move |_| onpick.call(genre),
                    "{genre}"
                }
            }
        }
    }
}
