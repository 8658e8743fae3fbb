//! Merging fallback and live candidates

use std::collections::HashSet;

use super::candidate::LocationCandidate;
use super::normalize::{identity_key, normalize};

/// Maximum number of suggestions displayed at once
pub const MAX_SUGGESTIONS: usize = 10;

fn display_text(candidate: &LocationCandidate) -> &str {
    if candidate.label.is_empty() {
        &candidate.value
    } else {
        &candidate.label
    }
}

/// Remove later candidates whose label matches an earlier one
///
/// First occurrences keep their order. Comparison is case- and
/// diacritic-insensitive on the whole label, so places that differ only
/// by country stay apart.
pub fn dedupe(candidates: Vec<LocationCandidate>) -> Vec<LocationCandidate> {
    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|c| seen.insert(normalize(display_text(c).trim())))
        .collect()
}

/// Combine fallback matches with live results
///
/// Fallback matches come first. A live result naming the same place as a
/// fallback match is dropped even when the country is spelled in another
/// language ("Paris (France)" against "Paris (França)"). The result is
/// truncated to `limit` entries.
pub fn merge(
    fallback_matches: Vec<LocationCandidate>,
    live_results: Vec<LocationCandidate>,
    limit: usize,
) -> Vec<LocationCandidate> {
    let mut combined = dedupe(fallback_matches);
    let places: HashSet<String> = combined
        .iter()
        .map(|c| identity_key(display_text(c)))
        .collect();

    combined.extend(
        live_results
            .into_iter()
            .filter(|c| !places.contains(&identity_key(display_text(c)))),
    );

    let mut unique = dedupe(combined);
    unique.truncate(limit);
    unique
}

#[cfg(test)]
#[path = "merge_tests.rs"]
mod merge_tests;
