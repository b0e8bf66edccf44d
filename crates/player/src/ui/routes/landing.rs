//! Landing page: what CineMatch does, and one way in

use dioxus::prelude::*;

use super::Route;

/// (icon, heading, blurb)
const FEATURES: &[(&str, &str, &str)] = &[
    (
        "🎭",
        "Mood aware",
        "Tell us how you feel and we lean into it, or help you out of it.",
    ),
    (
        "🛋️",
        "Made for the room",
        "Alone, with friends, a partner, or the whole family.",
    ),
    (
        "💎",
        "Hits or hidden gems",
        "Choose crowd favorites, underrated picks, or a mix of both.",
    ),
];

#[component]
pub fn LandingRoute() -> Element {
    let navigator = use_navigator();

    rsx! {
        div {
            class: "page landing-page",

            section {
                class: "hero",
                h1 { class: "hero-title", "CineMatch" }
                p {
                    class: "hero-tagline",
                    "Movies and series picked for how you feel tonight."
                }
                button {
                    class: "cta-button",
                    onclick: move |_| {
                        navigator.push(Route::RecommendRoute {});
                    },
                    "Get Recommendations"
                }
            }

            section {
                class: "features",
                for (icon, heading, blurb) in FEATURES.iter().copied() {
                    div {
                        key: "{heading}",
                        class: "feature-card",
                        span { class: "feature-icon", "{icon}" }
                        h3 { "{heading}" }
                        p { "{blurb}" }
                    }
                }
            }
        }
    }
}
