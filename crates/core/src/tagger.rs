//! Clinical keyword tagging over free-text symptom input.

use std::collections::BTreeSet;

/// Scans `text` for vocabulary keywords and merges them into `existing`.
///
/// Matching is case-insensitive substring matching, not whole-word: the
/// vocabulary entry `PALE` matches "pale gums". The result is a sorted,
/// deduplicated set; accumulating it into stored state is the caller's
/// responsibility.
pub fn extract_tags(
    text: &str,
    existing: &BTreeSet<String>,
    vocabulary: &[String],
) -> BTreeSet<String> {
    let haystack = text.to_uppercase();

    let mut tags = existing.clone();
    for entry in vocabulary {
        let needle = entry.to_uppercase();
        if haystack.contains(&needle) {
            tags.insert(needle);
        }
    }
    tags
}
