//! Client-side routes
//!
//! `/` is the landing page and `/recommend` the recommendation form. No
//! other paths are defined.

use dioxus::prelude::*;

mod landing;
mod recommend;

pub use landing::LandingRoute;
pub use recommend::RecommendRoute;

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    LandingRoute {},
    #[route("/recommend")]
    RecommendRoute {},
}
