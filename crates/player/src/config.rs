//! Runtime configuration for the player.
//!
//! The only setting is the recommendation backend's base URL. Desktop builds
//! read it from `CINEMATCH_API_URL` at startup; web builds bake it in at
//! compile time from the same variable.

use anyhow::{bail, Context};
use url::Url;

/// Default backend base URL (the recommendation service's default bind).
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Environment variable that overrides the backend base URL.
pub const API_URL_ENV: &str = "CINEMATCH_API_URL";

/// Path of the recommendation endpoint, relative to the base URL.
pub const RECOMMEND_PATH: &str = "/recommend";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerConfig {
    api_base_url: String,
}

impl PlayerConfig {
    /// Validate and normalize a backend base URL.
    pub fn new(api_base_url: &str) -> anyhow::Result<Self> {
        let trimmed = api_base_url.trim();
        let parsed = Url::parse(trimmed)
            .with_context(|| format!("invalid backend URL: {trimmed:?}"))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            bail!("backend URL must use http or https, got {}", parsed.scheme());
        }

        Ok(Self {
            api_base_url: trimmed.trim_end_matches('/').to_string(),
        })
    }

    /// Build config from an optional override, falling back to the default
    /// when the override is missing or invalid.
    pub fn from_override(value: Option<&str>) -> Self {
        match value.filter(|v| !v.trim().is_empty()) {
            None => Self::default(),
            Some(raw) => Self::new(raw).unwrap_or_else(|e| {
                tracing::warn!(
                    "Ignoring {}: {:#}; using {}",
                    API_URL_ENV,
                    e,
                    DEFAULT_API_BASE_URL
                );
                Self::default()
            }),
        }
    }

    /// Load config for the current platform.
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            let value = std::env::var(API_URL_ENV).ok();
            Self::from_override(value.as_deref())
        }

        #[cfg(target_arch = "wasm32")]
        {
            Self::from_override(option_env!("CINEMATCH_API_URL"))
        }
    }

    /// Full URL of the recommendation endpoint
    pub fn recommend_endpoint(&self) -> String {
        format!("{}{}", self.api_base_url, RECOMMEND_PATH)
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        let config = PlayerConfig::default();
        assert_eq!(config.recommend_endpoint(), "http://localhost:8000/recommend");
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let config = PlayerConfig::new("https://api.example.com/v1/ ").unwrap();
        assert_eq!(
            config.recommend_endpoint(),
            "https://api.example.com/v1/recommend"
        );
    }

    #[test]
    fn test_new_rejects_garbage_and_other_schemes() {
        assert!(PlayerConfig::new("not a url").is_err());
        assert!(PlayerConfig::new("ftp://example.com").is_err());
    }

    #[test]
    fn test_from_override_falls_back_to_default() {
        assert_eq!(PlayerConfig::from_override(None), PlayerConfig::default());
        assert_eq!(PlayerConfig::from_override(Some("  ")), PlayerConfig::default());
        assert_eq!(
            PlayerConfig::from_override(Some("::bad::")),
            PlayerConfig::default()
        );
        assert_eq!(
            PlayerConfig::from_override(Some("http://10.0.0.2:9000")).recommend_endpoint(),
            "http://10.0.0.2:9000/recommend"
        );
    }
}
