//! Scraper unit adapter — resolves the external scraper component by
//! filesystem convention.
//!
//! The scraper is an independently versioned component checked out into a
//! directory beside the server (typically as a git submodule). Resolution
//! happens fresh on every fetch, so scraper updates take effect without
//! restarting the server:
//!
//! 1. The configured directory must exist, else [`FeedError::NotFound`].
//! 2. Probe for an entry-point program named (in priority order)
//!    `scrape_phivolcs`, `scrape`, `get_earthquakes`, `get_data`. The first
//!    one found is run with no arguments; its stdout must be a JSON array
//!    of records.
//! 3. With no entry point, fall back to a static dataset file
//!    `EARTHQUAKES.json` in the same directory.
//! 4. Neither present → [`FeedError::DataUnavailable`].
//!
//! Whatever I/O the scraper itself performs (network scraping, caching) is
//! opaque to this adapter.

use crate::RecordSource;
use quakeview_core::{FeedError, RawRecord};
use std::path::{Path, PathBuf};
use tokio::process::Command;

/// Entry-point program names probed inside the scraper directory, in
/// priority order.
pub const ENTRY_POINTS: &[&str] = &["scrape_phivolcs", "scrape", "get_earthquakes", "get_data"];

/// Static dataset consulted when no entry-point program exists.
pub const FALLBACK_DATASET: &str = "EARTHQUAKES.json";

/// Record source backed by the external scraper directory.
#[derive(Debug, Clone)]
pub struct ScraperUnit {
    dir: PathBuf,
}

impl ScraperUnit {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The configured scraper directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    async fn invoke(&self, program: &Path) -> Result<Vec<RawRecord>, FeedError> {
        tracing::debug!(program = %program.display(), "invoking scraper entry point");
        // The child runs with the scraper directory as its cwd, so the
        // program path must be absolute before spawning.
        let program = std::fs::canonicalize(program)
            .map_err(|e| FeedError::Upstream(format!("{}: {e}", program.display())))?;
        let output = Command::new(&program)
            .current_dir(&self.dir)
            .output()
            .await
            .map_err(|e| FeedError::Upstream(format!("{}: {e}", program.display())))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(FeedError::Upstream(format!(
                "{} exited with {}: {}",
                program.display(),
                output.status,
                stderr.trim()
            )));
        }

        parse_records(&output.stdout)
    }

    async fn read_fallback(&self, dataset: &Path) -> Result<Vec<RawRecord>, FeedError> {
        tracing::debug!(dataset = %dataset.display(), "reading fallback dataset");
        let bytes = tokio::fs::read(dataset)
            .await
            .map_err(|e| FeedError::Upstream(format!("{}: {e}", dataset.display())))?;
        parse_records(&bytes)
    }
}

#[async_trait::async_trait]
impl RecordSource for ScraperUnit {
    async fn fetch(&self) -> Result<Vec<RawRecord>, FeedError> {
        if !self.dir.is_dir() {
            return Err(FeedError::NotFound(self.dir.clone()));
        }

        for name in ENTRY_POINTS {
            let program = self.dir.join(name);
            if program.is_file() {
                return self.invoke(&program).await;
            }
        }

        let dataset = self.dir.join(FALLBACK_DATASET);
        if dataset.is_file() {
            return self.read_fallback(&dataset).await;
        }

        Err(FeedError::DataUnavailable(self.dir.clone()))
    }
}

/// Parse scraper output as a JSON array of record mappings.
fn parse_records(bytes: &[u8]) -> Result<Vec<RawRecord>, FeedError> {
    serde_json::from_slice(bytes)
        .map_err(|e| FeedError::Upstream(format!("malformed record data: {e}")))
}
