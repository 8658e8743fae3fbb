//! Nominatim-style geocoding search client

use std::time::Duration;

use super::LookupError;
use crate::config::ProviderConfig;
use crate::location::{LocationCandidate, ProviderRecord};

/// Queries shorter than this never reach the network
pub const MIN_LOOKUP_CHARS: usize = 2;

/// Async client for the live location provider
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    http: reqwest::Client,
    endpoint: String,
    accept_language: String,
    limit: u32,
}

impl GeocodeClient {
    /// Create a client from configuration
    ///
    /// Returns `LookupError::Disabled` when the provider is turned off.
    pub fn from_config(config: &ProviderConfig) -> Result<Self, LookupError> {
        if !config.enabled || config.endpoint.trim().is_empty() {
            return Err(LookupError::Disabled);
        }

        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| LookupError::Network(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            accept_language: config.accept_language.clone(),
            limit: config.limit,
        })
    }

    /// Search the provider for locations matching `term`
    ///
    /// Terms shorter than two characters (after trimming) return an empty
    /// list without a request. Malformed response bodies degrade to an
    /// empty list; only transport failures and non-success statuses are
    /// errors.
    pub async fn fetch(&self, term: &str) -> Result<Vec<LocationCandidate>, LookupError> {
        let term = term.trim();
        if term.chars().count() < MIN_LOOKUP_CHARS {
            return Ok(Vec::new());
        }

        let limit = self.limit.to_string();
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("format", "json"),
                ("addressdetails", "1"),
                ("limit", limit.as_str()),
                ("q", term),
            ])
            .header(reqwest::header::ACCEPT_LANGUAGE, &self.accept_language)
            .send()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        Ok(parse_candidates(&body))
    }
}

/// Parse a search response body into candidates
///
/// Anything other than a JSON array yields no candidates. Array elements that
/// are not records, or that produce no usable value, are skipped.
pub fn parse_candidates(body: &[u8]) -> Vec<LocationCandidate> {
    let Ok(serde_json::Value::Array(items)) = serde_json::from_slice(body) else {
        log::debug!("Provider response is not a JSON array, ignoring");
        return Vec::new();
    };

    items
        .into_iter()
        .filter_map(|item| serde_json::from_value::<ProviderRecord>(item).ok())
        .filter_map(|record| record.to_candidate())
        .collect()
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
