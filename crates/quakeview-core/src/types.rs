//! Core types for quakeview.
//!
//! This module defines the two record shapes shared across all layers: the
//! untyped [`RawRecord`] as the scraper unit produces it, and the validated
//! [`NormalizedRecord`] that both HTTP surfaces serve.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An earthquake observation exactly as returned by the external scraper
/// unit: an untyped JSON mapping. Any key may be absent or of unexpected
/// type; the producer guarantees nothing.
///
/// Keys the normalizer looks at: `date`, `time`, `location`, `magnitude`,
/// `depth`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(pub serde_json::Map<String, Value>);

impl RawRecord {
    pub fn new() -> Self {
        Self(serde_json::Map::new())
    }

    /// Value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// String form of `key` with a default for absent values. Present
    /// strings pass through untouched; numbers and bools render in display
    /// form; null, arrays, and objects fall back to the default.
    pub fn string_or(&self, key: &str, default: &str) -> String {
        match self.0.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => default.to_string(),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for RawRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// A validated, presentation-ready earthquake record.
///
/// Produced only by the normalizer, which guarantees that `magnitude` met
/// the configured threshold. Serialises to the exact JSON shape the API
/// promises.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    /// Observation date as reported by the scraper. Empty when absent.
    pub date: String,
    /// Observation time as reported by the scraper. Empty when absent.
    pub time: String,
    /// Epicenter description. `"Unknown"` when absent.
    pub location: String,
    /// Parsed magnitude. Always at or above the filter threshold.
    pub magnitude: f64,
    /// Depth, passed through as-is from the raw record. The scraper is not
    /// consistent about units or type, so this stays an opaque value.
    /// `"N/A"` when absent.
    pub depth: Value,
}
