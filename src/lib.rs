//! # Tech News
//!
//! Retrieval of technology headlines from the GNews API with short-lived
//! response caching and a bundled sample-article fallback.
//!
//! ## Architecture
//!
//! - [`categories`]: static category registry and keyword classifier
//! - [`service`]: the retrieval pipeline ([`NewsService`]) that callers use
//! - [`api`]: the provider seam and its `reqwest` implementation
//! - [`mock`]: sample articles served when live data is unavailable
//! - [`outputs`]: JSON and Markdown renderers for the command-line host
//!
//! Service operations never fail: missing credentials, transport errors,
//! provider errors, and malformed payloads all resolve to sample articles
//! shaped exactly like live results.
//!
//! ```no_run
//! use tech_news::{Config, GNewsClient, NewsService};
//!
//! # async fn run() -> Result<(), tech_news::NewsError> {
//! let config = Config::with_api_key("YOUR_KEY");
//! let service = NewsService::new(GNewsClient::new(&config)?, config);
//! let news = service.get_news_by_category("devops").await;
//! println!("{} articles", news.total_articles());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod categories;
pub mod cli;
pub mod config;
pub mod error;
pub mod mock;
pub mod models;
pub mod outputs;
pub mod service;
mod utils;

pub use api::{Endpoint, GNewsClient, NewsProvider};
pub use categories::{CategoryDefinition, CategoryId};
pub use config::Config;
pub use error::NewsError;
pub use models::{Article, ResultSet, Source};
pub use service::{CacheStatus, NewsService};
