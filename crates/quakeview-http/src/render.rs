//! HTML board rendering.
//!
//! The page is built by hand into a `String`; record field values come from
//! an external scraper and are always escaped before insertion.

use quakeview_core::NormalizedRecord;
use serde_json::Value;
use std::fmt::Write;

/// Render the earthquake board for the given (already filtered) records.
pub fn page(records: &[NormalizedRecord]) -> String {
    let mut html = String::with_capacity(2048 + records.len() * 256);
    html.push_str(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n\
         <meta charset=\"utf-8\">\n\
         <title>PHIVOLCS Earthquake Viewer</title>\n\
         <style>\n\
         body { font-family: sans-serif; margin: 2rem; }\n\
         table { border-collapse: collapse; width: 100%; }\n\
         th, td { border: 1px solid #ccc; padding: 0.4rem 0.8rem; text-align: left; }\n\
         th { background: #f0f0f0; }\n\
         .count { color: #555; }\n\
         </style>\n</head>\n<body>\n\
         <h1>PHIVOLCS Earthquake Viewer</h1>\n",
    );

    let _ = writeln!(
        html,
        "<p class=\"count\">{} event{} at or above the magnitude threshold</p>",
        records.len(),
        if records.len() == 1 { "" } else { "s" }
    );

    html.push_str(
        "<table>\n<thead><tr>\
         <th>Date</th><th>Time</th><th>Location</th><th>Magnitude</th><th>Depth</th>\
         </tr></thead>\n<tbody>\n",
    );
    for rec in records {
        let _ = writeln!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(&rec.date),
            escape(&rec.time),
            escape(&rec.location),
            rec.magnitude,
            escape(&depth_text(&rec.depth)),
        );
    }
    html.push_str("</tbody>\n</table>\n");

    let _ = writeln!(
        html,
        "<p class=\"count\">Rendered at {} UTC</p>",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S")
    );
    html.push_str("</body>\n</html>\n");
    html
}

/// Depth is a passthrough value; strings display bare, anything else in its
/// JSON form.
fn depth_text(depth: &Value) -> String {
    match depth {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Minimal HTML escaping for text content and attribute values.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
