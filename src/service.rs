//! The news retrieval service.
//!
//! Every public operation maps a caller intent (top news, free-text search,
//! category) onto a provider query and runs it through one pipeline:
//!
//! 1. derive a cache signature from the endpoint and sorted parameters
//! 2. serve a fresh cache entry if there is one
//! 3. without a usable API key, serve sample articles (no network)
//! 4. otherwise make one provider request
//! 5. provider-reported errors or an unexpected payload shape fall back
//! 6. validate and normalize articles, keep the first 18, cache, return
//!
//! Operations never fail. Anything that goes wrong is logged and answered
//! with sample articles picked for the request's implied category.

use crate::api::{Endpoint, NewsProvider};
use crate::categories::{self, CategoryId};
use crate::config::Config;
use crate::error::NewsError;
use crate::mock;
use crate::models::{RawArticle, ResultSet};
use serde::Serialize;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::{debug, error, info, instrument, warn};

/// Upper bound on articles kept from a live response.
pub const MAX_LIVE_ARTICLES: usize = 18;

/// Terms OR-ed onto free-text searches to keep results on technology.
const SEARCH_BIAS_TERMS: &[&str] = &[
    "technology",
    "tech",
    "software",
    "programming",
    "AI",
    "machine learning",
    "web development",
];

/// How many of a category's keywords go into its search query.
const CATEGORY_QUERY_KEYWORDS: usize = 5;

/// Parameters sent with every provider request unless the caller overrides them.
const DEFAULT_PARAMS: &[(&str, &str)] = &[("lang", "en"), ("country", "us"), ("max", "20")];

/// Why a request was answered with sample articles.
#[derive(Debug)]
pub enum FallbackReason {
    /// No usable API key; the network was never touched.
    MissingCredential,
    Transport(NewsError),
    /// The provider answered with a non-empty `errors` list.
    ProviderError(Vec<String>),
    /// The payload had no `articles` array.
    MalformedResponse,
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackReason::MissingCredential => f.write_str("no API key configured"),
            FallbackReason::Transport(e) => write!(f, "{e}"),
            FallbackReason::ProviderError(errors) => {
                write!(f, "provider error: {}", errors.join(". "))
            }
            FallbackReason::MalformedResponse => f.write_str("unexpected response shape"),
        }
    }
}

/// Internal outcome of the pipeline, before collapsing to a [`ResultSet`].
#[derive(Debug)]
pub(crate) enum Retrieval {
    Cached(ResultSet),
    Live(ResultSet),
    Fallback(FallbackReason),
}

/// A provider query plus what the caller was asking for.
#[derive(Debug, Clone)]
pub(crate) struct Query {
    endpoint: Endpoint,
    params: BTreeMap<String, String>,
    /// Category whose samples answer this query if it falls back.
    fallback_category: CategoryId,
}

impl Query {
    fn new<'a>(
        endpoint: Endpoint,
        params: impl IntoIterator<Item = (&'a str, String)>,
        fallback_category: CategoryId,
    ) -> Self {
        Self {
            endpoint,
            params: params
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
            fallback_category,
        }
    }

    fn top_headlines() -> Self {
        Self::new(
            Endpoint::TopHeadlines,
            [("topic", "technology".to_string())],
            CategoryId::All,
        )
    }

    pub(crate) fn signature(&self) -> String {
        cache_signature(self.endpoint.path(), &self.params)
    }
}

/// Deterministic cache key: `endpoint?k1=v1&k2=v2` with keys sorted.
///
/// Insertion order of `params` has no effect on the result.
pub fn cache_signature<K, V>(endpoint: &str, params: impl IntoIterator<Item = (K, V)>) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut pairs: Vec<(K, V)> = params.into_iter().collect();
    pairs.sort_by(|a, b| a.0.as_ref().cmp(b.0.as_ref()));
    let joined = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", k.as_ref(), v.as_ref()))
        .collect::<Vec<_>>()
        .join("&");
    format!("{endpoint}?{joined}")
}

struct CacheEntry {
    data: ResultSet,
    created_at: Instant,
}

/// Snapshot of the cache for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheStatus {
    pub size: usize,
    /// Signatures currently held, sorted. May include expired entries.
    pub keys: Vec<String>,
}

/// Technology news retrieval with caching and sample-data fallback.
pub struct NewsService<P> {
    provider: P,
    config: Config,
    cache: RwLock<HashMap<String, CacheEntry>>,
}

impl<P> fmt::Debug for NewsService<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsService")
            .field("base_url", &self.config.base_url.as_str())
            .field("has_api_key", &self.config.usable_api_key().is_some())
            .field("cache_ttl", &self.config.cache_ttl)
            .finish()
    }
}

impl<P: NewsProvider> NewsService<P> {
    pub fn new(provider: P, config: Config) -> Self {
        if config.usable_api_key().is_none() {
            info!("No API key configured; serving sample articles");
        }
        Self {
            provider,
            config,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Latest technology headlines.
    pub async fn get_top_news(&self) -> ResultSet {
        self.run(Query::top_headlines()).await
    }

    /// Relevance-sorted search biased toward technology coverage.
    ///
    /// A blank query is the same as [`Self::get_top_news`].
    pub async fn search_news(&self, query: &str) -> ResultSet {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return self.get_top_news().await;
        }
        self.run(search_query(trimmed)).await
    }

    /// Most recent articles for a category id such as `"devops"`.
    ///
    /// `"all"` and ids the registry doesn't know return top news.
    pub async fn get_news_by_category(&self, category_id: &str) -> ResultSet {
        match category_query(category_id) {
            Some(query) => self.run(query).await,
            None => {
                if category_id != CategoryId::All.as_str() {
                    debug!(category_id, "Unknown category; serving top news");
                }
                self.get_top_news().await
            }
        }
    }

    /// Probe the provider with a one-article headline request.
    ///
    /// `true` only when the answer came from the provider (or a cached
    /// provider answer). Sample-data fallbacks count as unavailable.
    pub async fn test_connection(&self) -> bool {
        let probe = Query::new(
            Endpoint::TopHeadlines,
            [("max", "1".to_string()), ("topic", "technology".to_string())],
            CategoryId::All,
        );
        match self.retrieve(&probe).await {
            Retrieval::Live(_) | Retrieval::Cached(_) => true,
            Retrieval::Fallback(reason) => {
                error!(%reason, "API connection test failed");
                false
            }
        }
    }

    /// Drop every cache entry. The next call for any query goes live.
    pub async fn clear_cache(&self) {
        let mut cache = self.cache.write().await;
        let dropped = cache.len();
        cache.clear();
        info!(dropped, "Cache cleared");
    }

    pub async fn cache_status(&self) -> CacheStatus {
        let cache = self.cache.read().await;
        let mut keys: Vec<String> = cache.keys().cloned().collect();
        keys.sort();
        CacheStatus {
            size: cache.len(),
            keys,
        }
    }

    async fn run(&self, query: Query) -> ResultSet {
        match self.retrieve(&query).await {
            Retrieval::Cached(data) | Retrieval::Live(data) => data,
            Retrieval::Fallback(_) => mock::sample_result(query.fallback_category),
        }
    }

    #[instrument(level = "info", skip_all, fields(endpoint = %query.endpoint))]
    pub(crate) async fn retrieve(&self, query: &Query) -> Retrieval {
        let signature = query.signature();

        if let Some(data) = self.cached(&signature).await {
            debug!(%signature, "Returning cached data");
            return Retrieval::Cached(data);
        }

        let Some(api_key) = self.config.usable_api_key() else {
            debug!(%signature, "No API key; falling back to sample articles");
            return Retrieval::Fallback(FallbackReason::MissingCredential);
        };

        let mut params: BTreeMap<String, String> = DEFAULT_PARAMS
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        params.extend(query.params.clone());
        params.insert("apikey".to_string(), api_key.to_string());

        let payload = match self.provider.fetch(query.endpoint, &params).await {
            Ok(payload) => payload,
            Err(e) => {
                error!(error = %e, "News provider request failed; falling back to sample articles");
                return Retrieval::Fallback(FallbackReason::Transport(e));
            }
        };

        let data = match interpret_payload(payload) {
            Ok(data) => data,
            Err(reason) => {
                warn!(%reason, "Unusable provider response; falling back to sample articles");
                return Retrieval::Fallback(reason);
            }
        };

        info!(%signature, count = data.total_articles(), "Fetched live articles");
        self.cache.write().await.insert(
            signature,
            CacheEntry {
                data: data.clone(),
                created_at: Instant::now(),
            },
        );
        Retrieval::Live(data)
    }

    async fn cached(&self, signature: &str) -> Option<ResultSet> {
        let cache = self.cache.read().await;
        cache
            .get(signature)
            .filter(|entry| entry.created_at.elapsed() < self.config.cache_ttl)
            .map(|entry| entry.data.clone())
    }
}

fn search_query(text: &str) -> Query {
    let q = format!("{text} ({})", SEARCH_BIAS_TERMS.join(" OR "));
    Query::new(
        Endpoint::Search,
        [("q", q), ("sortby", "relevance".to_string())],
        categories::classify(text, ""),
    )
}

/// `None` for `all` and unknown ids, which both mean top news.
fn category_query(category_id: &str) -> Option<Query> {
    let def = categories::find_by_id(category_id).filter(|c| c.id != CategoryId::All)?;
    let keywords = def
        .keywords
        .iter()
        .take(CATEGORY_QUERY_KEYWORDS)
        .copied()
        .collect::<Vec<_>>()
        .join(" OR ");
    let q = format!("({keywords}) AND (technology OR tech OR software)");
    Some(Query::new(
        Endpoint::Search,
        [("q", q), ("sortby", "publishedAt".to_string())],
        def.id,
    ))
}

/// Turn a decoded provider payload into validated articles.
fn interpret_payload(payload: Value) -> Result<ResultSet, FallbackReason> {
    let Value::Object(mut body) = payload else {
        return Err(FallbackReason::MalformedResponse);
    };

    if let Some(Value::Array(errors)) = body.get("errors") {
        if !errors.is_empty() {
            let messages = errors
                .iter()
                .map(|e| match e {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect();
            return Err(FallbackReason::ProviderError(messages));
        }
    }

    let Some(Value::Array(items)) = body.remove("articles") else {
        return Err(FallbackReason::MalformedResponse);
    };

    let received = items.len();
    let articles: Vec<_> = items
        .into_iter()
        .filter_map(|item| serde_json::from_value::<RawArticle>(item).ok())
        .filter_map(RawArticle::into_article)
        .take(MAX_LIVE_ARTICLES)
        .collect();

    if articles.len() < received.min(MAX_LIVE_ARTICLES) {
        debug!(received, kept = articles.len(), "Dropped incomplete articles");
    }
    Ok(ResultSet::new(articles))
}
