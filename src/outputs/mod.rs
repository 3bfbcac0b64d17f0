//! Output generation for retrieved articles.
//!
//! # Submodules
//!
//! - [`json`]: Serializes a `ResultSet` exactly as the service returns it
//! - [`markdown`]: Renders a readable digest and the category list
//!
//! Both renderers return a `String`; [`write_output`] sends it to stdout or
//! a file.

pub mod json;
pub mod markdown;

use std::error::Error;
use std::path::Path;
use tokio::fs;
use tokio::io::{self, AsyncWriteExt};
use tracing::{info, instrument};

/// Write rendered output to `path`, or to stdout when no path is given.
///
/// Parent directories are created as needed.
#[instrument(level = "info", skip_all, fields(path = ?path))]
pub async fn write_output(rendered: &str, path: Option<&Path>) -> Result<(), Box<dyn Error>> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).await?;
            }
            fs::write(path, rendered).await?;
            info!(bytes = rendered.len(), "Wrote output file");
        }
        None => {
            let mut stdout = io::stdout();
            stdout.write_all(rendered.as_bytes()).await?;
            if !rendered.ends_with('\n') {
                stdout.write_all(b"\n").await?;
            }
            stdout.flush().await?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_write_output_creates_parent_dirs() {
        let dir = std::env::temp_dir().join(format!("tech_news_out_{}", std::process::id()));
        let path = dir.join("nested").join("digest.md");

        write_output("# Digest\n", Some(&path)).await.unwrap();
        assert_eq!(fs::read_to_string(&path).await.unwrap(), "# Digest\n");

        fs::remove_dir_all(&dir).await.unwrap();
    }
}
