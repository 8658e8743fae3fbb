// Configuration type definitions

use serde::Deserialize;

use crate::location::{DEFAULT_CITIES, MAX_SUGGESTIONS};

/// Suggestion timing and display configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SuggestConfig {
    /// Quiet period after the last keystroke before a lookup is dispatched
    pub debounce_ms: u64,
    /// Delay between a field losing focus and the box hiding
    pub blur_grace_ms: u64,
    /// Queries shorter than this (after trimming) show nothing
    pub min_query_chars: usize,
    pub max_suggestions: usize,
    /// Show the whole catalog when nothing matches and the live lookup had nothing
    pub show_full_catalog_on_miss: bool,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        SuggestConfig {
            debounce_ms: 250,
            blur_grace_ms: 120,
            min_query_chars: 2,
            max_suggestions: MAX_SUGGESTIONS,
            show_full_catalog_on_miss: false,
        }
    }
}

/// Live geocoding provider configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub enabled: bool,
    pub endpoint: String,
    pub accept_language: String,
    pub user_agent: String,
    /// Maximum records requested per lookup
    pub limit: u32,
    pub timeout_ms: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfig {
            enabled: true,
            endpoint: "https://nominatim.openstreetmap.org/search".to_string(),
            accept_language: "pt-BR".to_string(),
            user_agent: "TripMind/1.0 (contact@tripmind.local)".to_string(),
            limit: 10,
            timeout_ms: 5000,
        }
    }
}

/// Fallback catalog configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub cities: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            cities: DEFAULT_CITIES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub suggest: SuggestConfig,
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}
