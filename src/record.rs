// SPDX-License-Identifier: PMPL-1.0-or-later

//! Data model for one soil-series row.
//!
//! The export carries four locale triples per row. Only English and Spanish
//! are rendered; the remaining two (columns 7..=12) count toward the column
//! floor but produce no output.

use anyhow::{bail, Result};
use csv::StringRecord;
use serde::Serialize;

use crate::normalize::normalize_id;

/// Minimum fields per row: id plus four (name, description, management)
/// triples.
pub const MIN_COLUMNS: usize = 13;

/// Locales that get an output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    En,
    Es,
}

impl Locale {
    pub const EMITTED: [Locale; 2] = [Locale::En, Locale::Es];

    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }

    /// Output file name for this locale, e.g. `output_en.yaml`.
    pub fn output_filename(&self, extension: &str) -> String {
        format!("output_{}.{}", self.code(), extension)
    }
}

/// The localized text fields for one locale of one series.
#[derive(Debug, Clone, Serialize)]
pub struct LocaleTriple {
    pub name: String,
    pub description: String,
    pub management: String,
}

/// One row of the soil-series table, keyed and raw.
///
/// Text fields are stored exactly as exported; each renderer applies the
/// cleaning contract it needs.
#[derive(Debug, Clone)]
pub struct SoilSeriesRecord {
    pub id: String,
    pub en: LocaleTriple,
    pub es: LocaleTriple,
}

impl SoilSeriesRecord {
    /// Build a record from a raw CSV row. `row_number` is 1-based and only
    /// used in the error message.
    pub fn from_row(row: &StringRecord, row_number: usize) -> Result<Self> {
        if row.len() < MIN_COLUMNS {
            bail!(
                "row {} has {} columns, expected at least {}",
                row_number,
                row.len(),
                MIN_COLUMNS
            );
        }

        let field = |index: usize| row.get(index).unwrap_or("").to_string();
        let triple = |start: usize| LocaleTriple {
            name: field(start),
            description: field(start + 1),
            management: field(start + 2),
        };

        Ok(Self {
            id: normalize_id(row.get(0).unwrap_or("")),
            en: triple(1),
            es: triple(4),
        })
    }

    pub fn triple(&self, locale: Locale) -> &LocaleTriple {
        match locale {
            Locale::En => &self.en,
            Locale::Es => &self.es,
        }
    }
}
