//! Normalizer — coerces raw scraper records into [`NormalizedRecord`] values
//! and filters them by magnitude.
//!
//! Both HTTP surfaces go through [`normalize`]; there is exactly one copy of
//! the inclusion rule. The rule has a deliberate asymmetry:
//!
//! - `magnitude` **absent** → treated as 0, so the record normalises to 0.0
//!   and falls below any sane threshold (excluded by filtering).
//! - `magnitude` **present but unparsable** → the record is skipped outright
//!   and never gets a defaulted magnitude.
//!
//! Exclusion is a validation policy, not error handling: no excluded record
//! ever produces an error.

use crate::types::{NormalizedRecord, RawRecord};
use serde_json::Value;

/// Default inclusive magnitude threshold, overridable via `[filter]` in
/// `quakeview.toml`.
pub const MIN_MAGNITUDE: f64 = 3.0;

/// Normalise a raw record sequence, keeping records with
/// `magnitude >= threshold` in their original relative order.
pub fn normalize(records: &[RawRecord], threshold: f64) -> Vec<NormalizedRecord> {
    records
        .iter()
        .filter_map(|rec| normalize_record(rec, threshold))
        .collect()
}

/// Normalise a single record, or `None` if it is excluded (unparsable
/// magnitude, or below threshold).
fn normalize_record(rec: &RawRecord, threshold: f64) -> Option<NormalizedRecord> {
    let magnitude = match rec.get("magnitude") {
        None => 0.0,
        Some(value) => parse_magnitude(value)?,
    };
    if magnitude < threshold {
        return None;
    }

    Some(NormalizedRecord {
        date: rec.string_or("date", ""),
        time: rec.string_or("time", ""),
        location: rec.string_or("location", "Unknown"),
        magnitude,
        depth: rec
            .get("depth")
            .cloned()
            .unwrap_or_else(|| Value::String("N/A".to_string())),
    })
}

/// Lenient numeric coercion: numbers as-is, numeric strings (surrounding
/// whitespace tolerated), bools as 0/1. Everything else is unparsable.
fn parse_magnitude(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}
