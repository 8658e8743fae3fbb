//! Static fallback catalog of curated locations

use super::candidate::LocationCandidate;
use super::normalize::normalize;

/// Cities offered when the live provider is unavailable or has nothing
pub const DEFAULT_CITIES: &[&str] = &[
    "São Paulo - SP (Brasil)",
    "Rio de Janeiro - RJ (Brasil)",
    "Recife - PE (Brasil)",
    "Salvador - BA (Brasil)",
    "Lisboa (Portugal)",
    "Madrid (Espanha)",
    "Paris (França)",
    "Roma (Itália)",
    "Londres (Reino Unido)",
    "Buenos Aires (Argentina)",
];

/// Read-only, ordered list of pre-labeled candidates
#[derive(Debug, Clone)]
pub struct FallbackCatalog {
    entries: Vec<LocationCandidate>,
    /// Normalized labels, parallel to `entries`
    folded: Vec<String>,
}

impl FallbackCatalog {
    /// Build a catalog from pre-formatted "City - Region (Country)" strings
    ///
    /// Blank entries are skipped.
    pub fn new<I, S>(cities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries: Vec<LocationCandidate> = cities
            .into_iter()
            .map(Into::<String>::into)
            .filter(|c| !c.trim().is_empty())
            .map(LocationCandidate::labeled)
            .collect();
        let folded = entries.iter().map(|e| normalize(&e.label)).collect();

        Self { entries, folded }
    }

    /// Entries whose normalized label contains the normalized query
    pub fn matches(&self, normalized_query: &str) -> Vec<LocationCandidate> {
        self.entries
            .iter()
            .zip(&self.folded)
            .filter(|(_, folded)| folded.contains(normalized_query))
            .map(|(entry, _)| entry.clone())
            .collect()
    }

    pub fn entries(&self) -> &[LocationCandidate] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for FallbackCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_CITIES.iter().copied())
    }
}
