//! Command-line interface definitions.
//!
//! The API key and base URL can be supplied as flags or through the
//! environment (including a `.env` file in the working directory).

use crate::config::{Config, DEFAULT_BASE_URL, DEFAULT_CACHE_TTL, DEFAULT_TIMEOUT};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use url::Url;

/// Command-line arguments.
///
/// # Examples
///
/// ```sh
/// # Latest headlines as JSON (sample data when no key is set)
/// tech_news top
///
/// # Search, rendered as Markdown into a file
/// tech_news --format markdown --output digest.md search rust async
///
/// # Category feed with an explicit key
/// tech_news --api-key YOUR_KEY category cybersecurity
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// GNews API key; without one, sample articles are served
    #[arg(long, env = "GNEWS_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the GNews API
    #[arg(long, env = "GNEWS_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: Url,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    pub format: Format,

    /// Write output to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Latest technology headlines
    Top,
    /// Free-text search, biased toward technology coverage
    Search {
        /// Search terms; joined with spaces
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Most recent articles in a category (see `categories`)
    Category {
        /// Category id, e.g. `web-development`
        id: String,
    },
    /// List the known categories
    Categories,
    /// Check that the API key works
    TestConnection,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Markdown,
}

impl Cli {
    pub fn config(&self) -> Config {
        Config {
            api_key: self.api_key.clone(),
            base_url: self.base_url.clone(),
            timeout: DEFAULT_TIMEOUT,
            cache_ttl: DEFAULT_CACHE_TTL,
        }
    }
}
