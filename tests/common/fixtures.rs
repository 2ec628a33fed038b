//! Scraper-directory fixtures used across harnesses.
//!
//! Each helper materialises a scraper unit layout inside a [`tempfile`]
//! directory: entry-point scripts that print JSON to stdout, or the static
//! `EARTHQUAKES.json` fallback dataset.

use tempfile::TempDir;

/// The JSON a well-behaved scraper prints: three records of which only the
/// first survives normalisation at the default threshold.
pub const REFERENCE_OUTPUT: &str =
    r#"[{"magnitude": 5.0, "location": "Luzon"}, {"magnitude": 2.0}, {"magnitude": "x"}]"#;

/// Create an empty scraper directory.
pub fn empty_scraper_dir() -> TempDir {
    tempfile::tempdir().expect("create temp scraper dir")
}

/// Write an entry-point script named `name` that prints `json` on stdout
/// and exits 0.
#[cfg(unix)]
pub fn write_entry_point(dir: &TempDir, name: &str, json: &str) {
    write_script(dir, name, &format!("#!/bin/sh\necho '{json}'\n"))
}

/// Write an entry-point script named `name` that prints `message` on stderr
/// and exits 1.
#[cfg(unix)]
pub fn write_failing_entry_point(dir: &TempDir, name: &str, message: &str) {
    write_script(dir, name, &format!("#!/bin/sh\necho '{message}' >&2\nexit 1\n"))
}

#[cfg(unix)]
fn write_script(dir: &TempDir, name: &str, body: &str) {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.path().join(name);
    std::fs::write(&path, body).expect("write script");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
        .expect("mark script executable");
}

/// Write the static `EARTHQUAKES.json` fallback dataset.
pub fn write_fallback_dataset(dir: &TempDir, json: &str) {
    std::fs::write(dir.path().join("EARTHQUAKES.json"), json).expect("write fallback dataset");
}
