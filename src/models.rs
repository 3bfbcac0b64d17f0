//! Data models for retrieved articles and the result sets built from them.
//!
//! - [`Article`]: one validated (or sample) news item, as exposed to callers
//! - [`ResultSet`]: the answer to every retrieval call
//! - [`RawArticle`]: the lenient shape the provider actually sends, before
//!   validation drops incomplete items
//!
//! Field names serialize in camelCase to match the provider's JSON, so a
//! cached, live, or sample result all look the same on the wire.

use serde::{Deserialize, Serialize};

/// Publisher of an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub name: String,
    pub url: String,
}

/// A single news item.
///
/// `title` and `description` are always trimmed and non-empty; `content`
/// falls back to the description when the provider omits it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub title: String,
    pub description: String,
    pub content: String,
    /// Canonical link; doubles as the article's identity.
    pub url: String,
    pub image: String,
    /// ISO-8601 publication time, kept as the provider sent it.
    pub published_at: String,
    pub source: Source,
}

/// Response to any retrieval call.
///
/// The count is derived from the article list when the set is built, so
/// `total_articles() == articles().len()` holds for every value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSet {
    total_articles: usize,
    articles: Vec<Article>,
}

impl ResultSet {
    pub fn new(articles: Vec<Article>) -> Self {
        Self {
            total_articles: articles.len(),
            articles,
        }
    }

    pub fn total_articles(&self) -> usize {
        self.total_articles
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn into_articles(self) -> Vec<Article> {
        self.articles
    }
}

/// Source block as sent by the provider; either field may be missing.
#[derive(Debug, Default, Deserialize)]
pub struct RawSource {
    pub name: Option<String>,
    pub url: Option<String>,
}

/// Article as sent by the provider, before validation.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawArticle {
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub url: Option<String>,
    pub image: Option<String>,
    pub published_at: Option<String>,
    pub source: Option<RawSource>,
}

impl RawArticle {
    /// Validate and normalize into an [`Article`].
    ///
    /// Returns `None` when the title or description is blank, or when the
    /// url, image, publication time, or source name is missing or empty.
    pub fn into_article(self) -> Option<Article> {
        let title = non_blank(self.title)?;
        let description = non_blank(self.description)?;
        let url = non_empty(self.url)?;
        let image = non_empty(self.image)?;
        let published_at = non_empty(self.published_at)?;
        let source = self.source?;
        let source_name = non_empty(source.name)?;

        let content = non_blank(self.content).unwrap_or_else(|| description.clone());
        let source_url = non_empty(source.url).unwrap_or_else(|| url.clone());

        Some(Article {
            title,
            description,
            content,
            url,
            image,
            published_at,
            source: Source {
                name: source_name,
                url: source_url,
            },
        })
    }
}

/// Trimmed value, or `None` if absent or whitespace-only.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
