// SPDX-License-Identifier: PMPL-1.0-or-later

//! Identifier normalization for soil-series mapping keys.

/// Normalize a raw series identifier into a localization mapping key:
/// trim surrounding whitespace, lowercase, replace internal spaces with
/// underscores.
///
/// Total over all inputs (an empty identifier yields an empty key) and
/// idempotent.
pub fn normalize_id(raw: &str) -> String {
    raw.trim().to_lowercase().replace(' ', "_")
}
