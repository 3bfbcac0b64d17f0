//! Transport to the GNews headline API.
//!
//! # Architecture
//!
//! - [`NewsProvider`]: the seam the retrieval service calls through; one
//!   request in, one decoded JSON document out
//! - [`GNewsClient`]: the real implementation over `reqwest`
//!
//! The transport does no validation and no retrying. It reports transport
//! failures (timeouts, connection errors, non-2xx, undecodable bodies) as
//! [`NewsError`] and leaves the interpretation of the payload to the caller.

use crate::config::Config;
use crate::error::{NewsError, Result};
use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::time::Instant;
use tracing::{debug, instrument, warn};
use url::Url;

/// Provider endpoints the service uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    TopHeadlines,
    Search,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::TopHeadlines => "/top-headlines",
            Endpoint::Search => "/search",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Something that can answer a provider query with a JSON document.
pub trait NewsProvider {
    /// Issue one request. `params` is the complete query string, credential
    /// included.
    async fn fetch(&self, endpoint: Endpoint, params: &BTreeMap<String, String>) -> Result<Value>;
}

/// Join the base URL, endpoint path, and query parameters.
pub fn build_request_url(
    base: &Url,
    endpoint: Endpoint,
    params: &BTreeMap<String, String>,
) -> Result<Url> {
    let joined = format!("{}{}", base.as_str().trim_end_matches('/'), endpoint.path());
    let mut url = Url::parse(&joined)?;
    url.query_pairs_mut().extend_pairs(params.iter());
    Ok(url)
}

/// `reqwest`-backed client for `gnews.io`.
#[derive(Clone)]
pub struct GNewsClient {
    http: Client,
    base_url: Url,
}

impl fmt::Debug for GNewsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GNewsClient")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

impl GNewsClient {
    /// Build a client using the configured base URL and request timeout.
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .user_agent(concat!("tech_news/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }
}

impl NewsProvider for GNewsClient {
    #[instrument(level = "info", skip_all, fields(%endpoint))]
    async fn fetch(&self, endpoint: Endpoint, params: &BTreeMap<String, String>) -> Result<Value> {
        let url = build_request_url(&self.base_url, endpoint, params)?;
        let t0 = Instant::now();

        let resp = self.http.get(url).send().await?;
        let status = resp.status();
        let elapsed_ms = t0.elapsed().as_millis() as u64;

        if !status.is_success() {
            warn!(%status, elapsed_ms, "Provider returned non-success status");
            return Err(NewsError::Status(status));
        }

        let body = resp.bytes().await?;
        debug!(%status, elapsed_ms, bytes = body.len(), "Provider responded");
        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_build_request_url_keeps_base_path() {
        let base = Url::parse("https://gnews.io/api/v4").unwrap();
        let url = build_request_url(&base, Endpoint::TopHeadlines, &params(&[("topic", "technology")]))
            .unwrap();
        assert_eq!(url.as_str(), "https://gnews.io/api/v4/top-headlines?topic=technology");
    }

    #[test]
    fn test_build_request_url_encodes_query() {
        let base = Url::parse("https://gnews.io/api/v4/").unwrap();
        let url = build_request_url(
            &base,
            Endpoint::Search,
            &params(&[("q", "rust (tech OR AI)"), ("sortby", "relevance")]),
        )
        .unwrap();
        assert_eq!(url.path(), "/api/v4/search");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("q".to_string(), "rust (tech OR AI)".to_string()),
                ("sortby".to_string(), "relevance".to_string()),
            ]
        );
    }

    #[test]
    fn test_client_debug_shows_base_url() {
        let client = GNewsClient::new(&Config::with_api_key("secret-key")).unwrap();
        let dbg = format!("{client:?}");
        assert!(dbg.contains("gnews.io"));
        assert!(!dbg.contains("secret-key"));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_a_transport_error() {
        let config = Config {
            base_url: Url::parse("http://127.0.0.1:9").unwrap(),
            timeout: std::time::Duration::from_millis(500),
            ..Config::default()
        };
        let client = GNewsClient::new(&config).unwrap();
        let err = client
            .fetch(Endpoint::TopHeadlines, &params(&[("max", "1")]))
            .await
            .unwrap_err();
        assert!(matches!(err, NewsError::Http(_)));
    }
}
