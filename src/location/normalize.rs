//! Text normalization for location comparisons
//!
//! Normalized strings are only ever compared, never displayed or written
//! back into a field.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Fold text for comparison: strip diacritics and lowercase
///
/// Examples:
/// - "São Paulo" → "sao paulo"
/// - "França" → "franca"
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Comparison key identifying the place a label names
///
/// The key is the normalized label with the trailing parenthesized country
/// removed, so "Paris (França)" and "Paris (France)" collapse to the same
/// place while "Paris - Texas (United States)" stays distinct. Labels
/// without a country suffix use the whole normalized label.
///
/// Too coarse to compare live results with each other: "Paris (France)" and
/// "Paris (United States)" share a key. `merge` only uses it against
/// catalog entries.
pub fn identity_key(label: &str) -> String {
    let normalized = normalize(label);
    let normalized = normalized.trim();

    let place = match normalized.rfind(" (") {
        Some(idx) if normalized.ends_with(')') && idx > 0 => &normalized[..idx],
        _ => normalized,
    };

    place
        .split(',')
        .next()
        .unwrap_or(place)
        .trim()
        .to_string()
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod normalize_tests;
