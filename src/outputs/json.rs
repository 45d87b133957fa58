//! JSON output and result writing.
//!
//! Results are rendered to a string first, then written either to stdout or
//! to a file. When writing to a file, missing parent directories are
//! created.

use serde::Serialize;
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{error, info, instrument};

/// Serialize any result as pretty-printed JSON.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Write rendered output to `path`, or to stdout when `path` is `None`.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the
/// destination cannot be written.
#[instrument(level = "info", skip_all, fields(path = ?path))]
pub async fn write_output(contents: &str, path: Option<&str>) -> Result<(), Box<dyn Error>> {
    let Some(path) = path else {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(contents.as_bytes()).await?;
        if !contents.ends_with('\n') {
            stdout.write_all(b"\n").await?;
        }
        stdout.flush().await?;
        return Ok(());
    };

    if let Some(parent) = Path::new(path)
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
    {
        if let Err(e) = fs::create_dir_all(parent).await {
            error!(dir = %parent.display(), error = %e, "Failed to create output dir");
            return Err(e.into());
        }
    }

    fs::write(path, contents).await?;
    info!(path, bytes = contents.len(), "Wrote output file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use awful_news_api::ArticlePage;

    #[test]
    fn test_to_json_is_pretty() {
        let json = to_json(&ArticlePage::default()).unwrap();
        assert!(json.contains("\"totalResults\": 0"));
        assert!(json.contains('\n'));
    }

    #[tokio::test]
    async fn test_write_output_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/out.json");
        let path = path.to_str().unwrap();

        write_output("{}", Some(path)).await.unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "{}");
    }
}
