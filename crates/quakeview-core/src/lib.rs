//! quakeview-core — shared types and record pipeline for quakeview.
//!
//! This crate holds everything both HTTP surfaces depend on: the raw and
//! normalised record types, the normalizer/filter that turns one into the
//! other, the error taxonomy, and configuration.
//!
//! # Architecture
//!
//! ```text
//! RecordSource ──► Normalizer/Filter ──► JSON / HTML
//! ```
//!
//! The source adapter lives in `quakeview-feeds`; the surfaces live in
//! `quakeview-http`. Nothing here retains state between requests.

pub mod config;
pub mod error;
pub mod normalizer;
pub mod types;

pub use error::FeedError;
pub use types::{NormalizedRecord, RawRecord};
