//! Error taxonomy for the record pipeline.
//!
//! These are the only failures that reach the request boundary. Record-level
//! problems (bad magnitude, missing fields) never become errors — the
//! normalizer silently excludes those records instead.

use std::path::PathBuf;

/// Failure to obtain a raw record sequence from the scraper unit.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// The configured scraper directory does not exist. Checked lazily on
    /// every fetch, never at startup.
    #[error("scraper unit not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The scraper directory exists but exposes neither a recognised entry
    /// point nor the fallback dataset.
    #[error("no data source found in scraper unit {}", .0.display())]
    DataUnavailable(PathBuf),

    /// The scraper itself failed: non-zero exit, unparsable output, or a
    /// malformed fallback dataset.
    #[error("scraper failed: {0}")]
    Upstream(String),
}

impl FeedError {
    /// Machine-readable discriminant, exposed in error responses alongside
    /// the human-readable message.
    pub fn kind(&self) -> &'static str {
        match self {
            FeedError::NotFound(_) => "not_found",
            FeedError::DataUnavailable(_) => "data_unavailable",
            FeedError::Upstream(_) => "upstream_failure",
        }
    }
}
