//! Runtime configuration for the retrieval service.
//!
//! Values come from the command line or environment (see [`crate::cli`]),
//! with a `.env` file in the working directory loaded first so local keys
//! don't have to be exported by hand.

use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://gnews.io/api/v4";

/// Per-request ceiling for the provider call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// How long a live response stays servable from cache.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(30 * 60);

/// Value shipped in sample `.env` files; treated the same as no key.
pub const PLACEHOLDER_API_KEY: &str = "your_api_key_here";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub base_url: Url,
    pub timeout: Duration,
    pub cache_ttl: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url is valid"),
            timeout: DEFAULT_TIMEOUT,
            cache_ttl: DEFAULT_CACHE_TTL,
        }
    }
}

impl Config {
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// The credential, if it is set, non-blank, and not the placeholder.
    ///
    /// `None` puts the service in zero-network mode.
    pub fn usable_api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty() && *k != PLACEHOLDER_API_KEY)
    }
}

/// Load `.env` from the working directory if one exists.
///
/// Returns whether a file was loaded. A missing file is not an error.
pub fn load_dotenv() -> bool {
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "Loaded .env file");
            true
        }
        Err(e) if e.not_found() => false,
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring unreadable .env file");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = Config::default();
        assert_eq!(cfg.base_url.as_str(), "https://gnews.io/api/v4");
        assert_eq!(cfg.timeout, Duration::from_millis(15_000));
        assert_eq!(cfg.cache_ttl, Duration::from_secs(1800));
        assert!(cfg.usable_api_key().is_none());
    }

    #[test]
    fn test_placeholder_and_blank_keys_are_unusable() {
        assert!(Config::with_api_key("").usable_api_key().is_none());
        assert!(Config::with_api_key("   ").usable_api_key().is_none());
        assert!(Config::with_api_key("your_api_key_here").usable_api_key().is_none());
        assert_eq!(Config::with_api_key(" abc123 ").usable_api_key(), Some("abc123"));
    }
}
