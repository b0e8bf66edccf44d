//! Request status indicators

use cinematch_domain::RequestStatus;
use dioxus::prelude::*;

use super::results_column::ResultsColumn;

#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div {
            class: "loading",
            role: "status",
            div { class: "spinner" }
            span { "Finding recommendations..." }
        }
    }
}

/// Banner for any failed submission; cleared by submitting again
#[component]
pub fn ErrorBanner(#[props(into)] message: String) -> Element {
    rsx! {
        div {
            class: "error-banner",
            role: "alert",
            "{message}"
        }
    }
}

/// Outcome area under the form.
///
/// Empty before the first submission, then exactly one of the spinner, the
/// error banner, or the two result columns.
#[component]
pub fn StatusPanel(status: RequestStatus) -> Element {
    match status {
        RequestStatus::Idle => rsx! {},
        RequestStatus::Loading => rsx! { LoadingIndicator {} },
        RequestStatus::Error(message) => rsx! { ErrorBanner { message: message } },
        RequestStatus::Success(result) => rsx! {
            div {
                class: "results-grid",
                ResultsColumn { title: "Movies", items: result.movies }
                ResultsColumn { title: "TV Shows", items: result.tv }
            }
        },
    }
}
