// SPDX-License-Identifier: PMPL-1.0-or-later

//! Rendering of cleaned records into the two output formats.

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use serde_json::{Map, Value};

use crate::clean::TextCleaner;
use crate::record::{Locale, LocaleTriple, SoilSeriesRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Comma-terminated pseudo-JSON fragments for manual splicing. The
    /// historical output files carried a .yaml extension even though the
    /// content is not YAML; downstream docs reference those names, so it
    /// stays.
    Fragment,
    /// A standalone, valid JSON document per locale.
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Fragment => "yaml",
            OutputFormat::Json => "json",
        }
    }
}

/// Write one fragment block for one locale of one record:
///
/// ```text
/// "<id>": {
///     "name": "<name>",
///     "description": "<description>",
///     "management": "<management>"
/// },
/// ```
///
/// Every block is comma-terminated, the last one included; the output is a
/// splice-ready sequence, not a standalone document.
pub fn write_fragment<W: Write>(
    out: &mut W,
    record: &SoilSeriesRecord,
    locale: Locale,
    cleaner: &TextCleaner,
) -> Result<()> {
    let triple = record.triple(locale);
    writeln!(out, "\"{}\": {{", record.id)?;
    writeln!(out, "    \"name\": \"{}\",", cleaner.clean(Some(&triple.name)))?;
    writeln!(
        out,
        "    \"description\": \"{}\",",
        cleaner.clean(Some(&triple.description))
    )?;
    writeln!(
        out,
        "    \"management\": \"{}\"",
        cleaner.clean(Some(&triple.management))
    )?;
    writeln!(out, "}},")?;
    Ok(())
}

/// Render all records for one locale as a pretty-printed JSON document.
/// Keys keep input row order. Break markers are stripped; quote escaping is
/// serde's job here, so the manual escape is not applied.
pub fn render_json(
    records: &[SoilSeriesRecord],
    locale: Locale,
    cleaner: &TextCleaner,
) -> Result<String> {
    let mut doc = Map::with_capacity(records.len());
    for record in records {
        let triple = record.triple(locale);
        let stripped = LocaleTriple {
            name: cleaner.strip_breaks(Some(&triple.name)),
            description: cleaner.strip_breaks(Some(&triple.description)),
            management: cleaner.strip_breaks(Some(&triple.management)),
        };
        doc.insert(record.id.clone(), serde_json::to_value(&stripped)?);
    }
    Ok(serde_json::to_string_pretty(&Value::Object(doc))?)
}
