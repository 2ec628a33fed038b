//! quakeview-feeds — record source adapters for quakeview.
//!
//! A source adapter obtains the raw record sequence for one request. The
//! only production adapter is [`ScraperUnit`], which resolves the external
//! scraper component by filesystem convention; tests substitute their own
//! [`RecordSource`] implementations.

pub mod scraper_unit;

pub use scraper_unit::ScraperUnit;

use quakeview_core::{FeedError, RawRecord};

/// Capability interface for anything that can produce a raw record
/// sequence. One fetch per request; implementations must not cache.
#[async_trait::async_trait]
pub trait RecordSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<RawRecord>, FeedError>;
}
