// SPDX-License-Identifier: PMPL-1.0-or-later

//! soilseries-convert — soil-series reference table to localization fragments.
//!
//! Reads a headerless CSV export of the soil-series description table (one
//! row per soil series: identifier plus name/description/management text in
//! four languages) and writes one output file per emitted locale. The default
//! output is a sequence of comma-terminated, JSON-object-shaped fragments
//! meant to be pasted into the consuming application's localization files by
//! hand; a standalone JSON document mode is available for consumers that want
//! to skip the splice.
//!
//! The conversion is a single sequential pass. Each row is parsed, cleaned,
//! rendered, and dropped; nothing is accumulated in fragment mode and input
//! row order is preserved exactly in the output.

pub mod clean;
pub mod convert;
pub mod normalize;
pub mod record;
pub mod render;
