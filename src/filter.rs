//! Live text search over a category's tips.
//!
//! The match is a plain case-insensitive substring test against the title and
//! the body. The query is never trimmed: a query of a single space only keeps
//! records that contain a space. `str::to_lowercase` follows the Unicode case
//! tables rather than the process locale, so results are identical on every
//! machine.

use crate::models::TipRecord;

/// Whether `tip` survives a search for `query`.
pub fn matches(tip: &TipRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    contains_lowered(tip, &needle)
}

/// Keep the records whose title or content contains `query`, preserving input
/// order. An empty query returns everything.
pub fn filter<'a>(tips: &'a [TipRecord], query: &str) -> Vec<&'a TipRecord> {
    if query.is_empty() {
        return tips.iter().collect();
    }
    let needle = query.to_lowercase();
    tips.iter()
        .filter(|tip| contains_lowered(tip, &needle))
        .collect()
}

fn contains_lowered(tip: &TipRecord, needle: &str) -> bool {
    tip.title.to_lowercase().contains(needle) || tip.content.to_lowercase().contains(needle)
}
