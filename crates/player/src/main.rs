//! CineMatch - composition root binary.

use std::sync::Arc;

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cinematch_player::config::PlayerConfig;
use cinematch_player::infrastructure::HttpRecommendationClient;
use cinematch_player::ports::outbound::RecommendationPort;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cinematch_player=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting CineMatch");

    let config = PlayerConfig::from_env();
    tracing::info!(endpoint = %config.recommend_endpoint(), "Recommendation backend");

    // HTTP
    let recommendations: Arc<dyn RecommendationPort> =
        Arc::new(HttpRecommendationClient::new(&config));

    // Launch Dioxus
    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let window = dioxus_desktop::WindowBuilder::new().with_title("CineMatch");
        let cfg = dioxus_desktop::Config::new().with_window(window);
        builder = builder.with_cfg(cfg);
    }

    builder
        .with_context(cinematch_player::presentation::Services::new(
            recommendations,
        ))
        .launch(cinematch_player::app);
}
