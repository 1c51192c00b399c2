// SPDX-License-Identifier: PMPL-1.0-or-later

//! Text cleaning for localized field values.
//!
//! The source table stores rich text with `<br>` line breaks. Those collapse
//! to a single space so each value fits on one output line. All other HTML
//! markup is passed through untouched; the consuming application renders it
//! as-is, and stripping it here would be a silent data change.

use anyhow::Result;
use regex::Regex;

/// Cleans field values pulled from the CSV export.
pub struct TextCleaner {
    break_marker: Regex,
}

impl TextCleaner {
    pub fn new() -> Result<Self> {
        // Any-case <br>, <br/>, <br />, plus the whitespace around it.
        let break_marker = Regex::new(r"(?i)\s*<br\s*/?>\s*")?;
        Ok(Self { break_marker })
    }

    /// Collapse HTML line-break markers to a single space. A missing value
    /// (NULL in the source table exports as an absent field) becomes the
    /// empty string.
    pub fn strip_breaks(&self, value: Option<&str>) -> String {
        match value {
            Some(text) => self.break_marker.replace_all(text, " ").into_owned(),
            None => String::new(),
        }
    }

    /// Full cleaning contract for fragment output: strip break markers, then
    /// escape embedded double quotes so the value is safe inside a
    /// double-quoted JSON string literal.
    pub fn clean(&self, value: Option<&str>) -> String {
        escape_quotes(&self.strip_breaks(value))
    }
}

/// Escape embedded double quotes for emission inside a quoted literal.
pub fn escape_quotes(text: &str) -> String {
    text.replace('"', "\\\"")
}
