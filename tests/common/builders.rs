//! Test builders — ergonomic constructors for raw records and stub sources.
//!
//! These are designed for readability in test assertions, not for production
//! use. They panic on invalid input rather than returning `Result`.

use quakeview_core::{FeedError, RawRecord};
use quakeview_feeds::RecordSource;
use serde_json::Value;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// RawRecordBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`RawRecord`] test fixtures.
///
/// # Example
///
/// ```rust
/// let rec = RawRecordBuilder::new()
///     .magnitude(5.0)
///     .location("Luzon")
///     .depth("10 km")
///     .build();
/// ```
#[derive(Default)]
pub struct RawRecordBuilder {
    entries: serde_json::Map<String, Value>,
}

impl RawRecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn magnitude(self, value: impl Into<Value>) -> Self {
        self.field("magnitude", value)
    }

    pub fn location(self, value: impl Into<Value>) -> Self {
        self.field("location", value)
    }

    pub fn date(self, value: impl Into<Value>) -> Self {
        self.field("date", value)
    }

    pub fn time(self, value: impl Into<Value>) -> Self {
        self.field("time", value)
    }

    pub fn depth(self, value: impl Into<Value>) -> Self {
        self.field("depth", value)
    }

    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> RawRecord {
        RawRecord(self.entries)
    }
}

/// Build a record with just a magnitude.
pub fn mag_record(magnitude: impl Into<Value>) -> RawRecord {
    RawRecordBuilder::new().magnitude(magnitude).build()
}

/// Build a record with a magnitude and a location.
pub fn quake(magnitude: impl Into<Value>, location: &str) -> RawRecord {
    RawRecordBuilder::new()
        .magnitude(magnitude)
        .location(location)
        .build()
}

// ---------------------------------------------------------------------------
// Stub record sources
// ---------------------------------------------------------------------------

/// What a [`StubSource`] should do on fetch.
pub enum StubBehavior {
    Records(Vec<RawRecord>),
    NotFound(PathBuf),
    DataUnavailable(PathBuf),
    Upstream(String),
}

/// In-memory [`RecordSource`] for router tests; no filesystem, no process.
pub struct StubSource(pub StubBehavior);

impl StubSource {
    pub fn records(records: Vec<RawRecord>) -> Self {
        Self(StubBehavior::Records(records))
    }
}

#[async_trait::async_trait]
impl RecordSource for StubSource {
    async fn fetch(&self) -> Result<Vec<RawRecord>, FeedError> {
        match &self.0 {
            StubBehavior::Records(records) => Ok(records.clone()),
            StubBehavior::NotFound(path) => Err(FeedError::NotFound(path.clone())),
            StubBehavior::DataUnavailable(path) => Err(FeedError::DataUnavailable(path.clone())),
            StubBehavior::Upstream(msg) => Err(FeedError::Upstream(msg.clone())),
        }
    }
}
