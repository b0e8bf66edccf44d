//! Recommendation page
//!
//! Owns the form record and the request status. Both live only as long as
//! this page is mounted: navigating away and back starts from a fresh form.
//! A submitted request always runs to completion; its outcome is applied
//! only if the page is still mounted.

use dioxus::core::spawn_forever;
use dioxus::prelude::*;

use cinematch_domain::{
    append_genre, parse_genres, Choice, FormField, FormInput, Mood, PopularityBias,
    RecommendationResult, RequestStatus, WatchingContext,
};

use super::Route;
use crate::application::RecommendationError;
use crate::presentation::components::{GenreSuggestions, LabeledInput, LabeledSelect, StatusPanel};
use crate::presentation::services::use_recommendation_service;

/// Replace one field of the form record.
fn apply_edit(mut form: Signal<FormInput>, field: FormField, value: String) {
    let next = form.read().with_field(field, &value);
    match next {
        Ok(next) => form.set(next),
        Err(e) => tracing::warn!("Ignoring edit to {}: {}", field, e),
    }
}

/// Apply a finished request's outcome to the page.
///
/// Returns false when the page was unmounted while the request was in
/// flight; the outcome is dropped without effect.
fn settle(
    mut status: Signal<RequestStatus>,
    outcome: Result<RecommendationResult, RecommendationError>,
) -> bool {
    let Ok(mut current) = status.try_write() else {
        tracing::debug!("Recommendation page closed before the response arrived");
        return false;
    };
    match current.resolve(outcome) {
        Ok(next) => {
            *current = next;
            true
        }
        Err(e) => {
            tracing::warn!("Discarding recommendation outcome: {}", e);
            false
        }
    }
}

#[component]
pub fn RecommendRoute() -> Element {
    let service = use_recommendation_service();
    let form = use_signal(FormInput::default);
    let mut status = use_signal(RequestStatus::default);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        let loading = match status.read().begin() {
            Ok(next) => next,
            Err(e) => {
                tracing::debug!("Submit ignored: {}", e);
                return;
            }
        };
        status.set(loading);

        let snapshot = form.read().clone();
        let service = service.clone();
        // Not tied to this page's scope, so leaving the page never aborts the request
        spawn_forever(async move {
            let outcome = service.recommend(&snapshot).await;
            settle(status, outcome);
        });
    };

    let current = status.read().clone();
    let submit_disabled = current.submit_disabled();
    let values = form.read().clone();
    let selected_genres = parse_genres(&values.favorite_genres);

    rsx! {
        div {
            class: "page recommend-page",

            header {
                class: "page-header",
                Link { class: "brand", to: Route::LandingRoute {}, "CineMatch" }
            }

            main {
                class: "recommend-layout",

                form {
                    class: "recommend-form",
                    onsubmit: onsubmit,

                    h1 { class: "form-title", "What should I watch?" }

                    LabeledInput {
                        label: "Favorite movie",
                        name: FormField::FavoriteMovie.name(),
                        value: values.favorite_movie.clone(),
                        placeholder: "e.g. Inception",
                        oninput: move |v: String| apply_edit(form, FormField::FavoriteMovie, v),
                    }

                    LabeledInput {
                        label: "Favorite genres",
                        name: FormField::FavoriteGenres.name(),
                        value: values.favorite_genres.clone(),
                        placeholder: "Comma-separated, e.g. Sci-Fi, Thriller",
                        oninput: move |v: String| apply_edit(form, FormField::FavoriteGenres, v),
                    }

                    GenreSuggestions {
                        selected: selected_genres,
                        onpick: move |genre: &'static str| {
                            let next = append_genre(&form.read().favorite_genres, genre);
                            apply_edit(form, FormField::FavoriteGenres, next);
                        },
                    }

                    LabeledSelect {
                        label: "Current mood",
                        name: FormField::CurrentMood.name(),
                        value: values.current_mood.value(),
                        options: Mood::options(),
                        onchange: move |v: String| apply_edit(form, FormField::CurrentMood, v),
                    }

                    LabeledSelect {
                        label: "Watching with",
                        name: FormField::WatchingContext.name(),
                        value: values.watching_context.value(),
                        options: WatchingContext::options(),
                        onchange: move |v: String| apply_edit(form, FormField::WatchingContext, v),
                    }

                    LabeledSelect {
                        label: "Popularity",
                        name: FormField::PopularityBias.name(),
                        value: values.popularity_bias.value(),
                        options: PopularityBias::options(),
                        onchange: move |v: String| apply_edit(form, FormField::PopularityBias, v),
                    }

                    button {
                        class: "submit-button",
                        r#type: "submit",
                        disabled: submit_disabled,
                        if submit_disabled { "Finding..." } else { "Get Recommendations" }
                    }
                }

                StatusPanel { status: current }
            }
        }
    }
}
