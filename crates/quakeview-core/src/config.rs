//! Configuration types for quakeview.
//!
//! [`Config::load`] layers an optional `quakeview.toml` (working directory,
//! or an explicit path) on top of hardcoded defaults. [`Config::defaults`]
//! returns the same defaults without touching the filesystem (useful in
//! tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[server]
bind = "0.0.0.0:8000"

[scraper]
dir = "phivolcs-earthquake-data-scraper"

[filter]
min_magnitude = 3.0
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `quakeview.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub scraper: ScraperConfig,
    #[serde(default)]
    pub filter: FilterConfig,
}

/// `[server]` section of `quakeview.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_bind() -> String {
    "0.0.0.0:8000".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind: default_bind() }
    }
}

/// `[scraper]` section of `quakeview.toml`. The directory is resolved
/// relative to the working directory and re-checked on every request.
#[derive(Debug, Clone, Deserialize)]
pub struct ScraperConfig {
    #[serde(default = "default_scraper_dir")]
    pub dir: PathBuf,
}

fn default_scraper_dir() -> PathBuf {
    PathBuf::from("phivolcs-earthquake-data-scraper")
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self { dir: default_scraper_dir() }
    }
}

/// `[filter]` section of `quakeview.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct FilterConfig {
    /// Inclusive magnitude threshold; records below it are dropped.
    #[serde(default = "default_min_magnitude")]
    pub min_magnitude: f64,
}

fn default_min_magnitude() -> f64 {
    crate::normalizer::MIN_MAGNITUDE
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self { min_magnitude: default_min_magnitude() }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load configuration, layering `path` (or `./quakeview.toml` when no
    /// path is given) on top of the built-in defaults. A missing file is not
    /// an error; a malformed one is.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let path = path.unwrap_or(Path::new("quakeview.toml"));

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
