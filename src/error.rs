//! Transport errors raised while talking to the news provider.
//!
//! None of these ever reach a caller of [`crate::service::NewsService`]: the
//! service logs them and answers with sample articles instead. They exist so
//! the fallback path can record *why* it was taken.

use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single provider round-trip.
#[derive(Debug, Error)]
pub enum NewsError {
    /// Connection refused, DNS failure, timeout, or body read error.
    #[error("request to news provider failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a non-2xx status.
    #[error("news provider returned HTTP {0}")]
    Status(StatusCode),

    /// The body was not valid JSON.
    #[error("news provider returned an undecodable body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured base URL and endpoint did not form a valid URL.
    #[error("invalid provider url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, NewsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_names_the_code() {
        let err = NewsError::Status(StatusCode::FORBIDDEN);
        assert_eq!(err.to_string(), "news provider returned HTTP 403 Forbidden");
    }

    #[test]
    fn decode_error_converts_from_serde() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{\"articles\": [");
        let err: NewsError = parse.unwrap_err().into();
        assert!(matches!(err, NewsError::Decode(_)));
    }
}
