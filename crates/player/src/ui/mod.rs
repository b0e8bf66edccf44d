use dioxus::prelude::*;

pub mod presentation;
pub mod routes;

pub use routes::Route;

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    rsx! {
        document::Title { "CineMatch" }
        document::Stylesheet {
            href: asset!("/assets/css/main.css"),
        }

        div {
            class: "app-shell",
            Router::<routes::Route> {}
        }
    }
}
