//! # Tech News
//!
//! Command-line front end for the technology news retrieval service.
//!
//! ## Usage
//!
//! ```sh
//! GNEWS_API_KEY=... tech_news --format markdown category cloud-computing
//! ```
//!
//! Logs go to stderr (filter with `RUST_LOG`); results go to stdout or the
//! file named by `--output`.

use clap::Parser;
use std::error::Error;
use std::process::ExitCode;
use tech_news::categories::list_categories;
use tech_news::cli::{Cli, Command, Format};
use tech_news::config::load_dotenv;
use tech_news::outputs::{json, markdown, write_output};
use tech_news::{GNewsClient, NewsService, ResultSet};
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

#[tokio::main]
async fn main() -> ExitCode {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let dotenv_loaded = load_dotenv();
    let args = Cli::parse();
    debug!(?args.command, ?args.format, dotenv_loaded, "Parsed CLI arguments");

    match run(args).await {
        Ok(code) => code,
        Err(e) => {
            error!(error = %e, "tech_news failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Cli) -> Result<ExitCode, Box<dyn Error>> {
    let start_time = std::time::Instant::now();
    let config = args.config();
    let service = NewsService::new(GNewsClient::new(&config)?, config);

    let (heading, result) = match &args.command {
        Command::Categories => {
            let rendered = match args.format {
                Format::Json => json::categories(list_categories())?,
                Format::Markdown => markdown::categories(list_categories()),
            };
            write_output(&rendered, args.output.as_deref()).await?;
            return Ok(ExitCode::SUCCESS);
        }
        Command::TestConnection => {
            let connected = service.test_connection().await;
            let status = if connected { "connected" } else { "unavailable" };
            write_output(status, args.output.as_deref()).await?;
            return Ok(if connected {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            });
        }
        Command::Top => (
            "Top technology news".to_string(),
            service.get_top_news().await,
        ),
        Command::Search { query } => {
            let query = query.join(" ");
            let result = service.search_news(&query).await;
            (format!("Search: {query}"), result)
        }
        Command::Category { id } => {
            let heading = match tech_news::categories::find_by_id(id) {
                Some(cat) => cat.name.to_string(),
                None => "Top technology news".to_string(),
            };
            (heading, service.get_news_by_category(id).await)
        }
    };

    emit(&args, &heading, &result).await?;

    let status = service.cache_status().await;
    debug!(cache_size = status.size, keys = ?status.keys, "Cache status");
    info!(
        articles = result.total_articles(),
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        "Execution complete"
    );
    Ok(ExitCode::SUCCESS)
}

async fn emit(args: &Cli, heading: &str, result: &ResultSet) -> Result<(), Box<dyn Error>> {
    let rendered = match args.format {
        Format::Json => json::result_set(result)?,
        Format::Markdown => markdown::result_set(heading, result),
    };
    write_output(&rendered, args.output.as_deref()).await
}
