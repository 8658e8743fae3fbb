//! Location candidates and provider record extraction

use serde::Deserialize;

/// A suggestion that can be offered for a location field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationCandidate {
    /// Text written into the field when the candidate is selected
    pub value: String,
    /// Human-readable display string
    pub label: String,
}

impl LocationCandidate {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Candidate whose value and label are the same string (catalog entries)
    pub fn labeled(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            value: text.clone(),
            label: text,
        }
    }
}

/// Address block of a geocoding search record
///
/// Every field is optional; providers omit whatever does not apply.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderAddress {
    pub city: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
    pub municipality: Option<String>,
    pub state: Option<String>,
    pub county: Option<String>,
    pub country: Option<String>,
}

/// One record from a geocoding search response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderRecord {
    #[serde(default)]
    pub address: Option<ProviderAddress>,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Returns the first present, non-blank field
fn first_present<'a>(fields: &[Option<&'a str>]) -> Option<&'a str> {
    fields
        .iter()
        .flatten()
        .map(|s| s.trim())
        .find(|s| !s.is_empty())
}

impl ProviderRecord {
    /// City name in preference order: city, town, village, municipality,
    /// then the first comma-delimited segment of `display_name`
    pub fn city(&self) -> Option<&str> {
        let address = self.address.as_ref();
        let display_head = self
            .display_name
            .as_deref()
            .and_then(|name| name.split(',').next());

        first_present(&[
            address.and_then(|a| a.city.as_deref()),
            address.and_then(|a| a.town.as_deref()),
            address.and_then(|a| a.village.as_deref()),
            address.and_then(|a| a.municipality.as_deref()),
            display_head,
        ])
    }

    /// State, falling back to county
    pub fn region(&self) -> Option<&str> {
        let address = self.address.as_ref()?;
        first_present(&[address.state.as_deref(), address.county.as_deref()])
    }

    pub fn country(&self) -> Option<&str> {
        let address = self.address.as_ref()?;
        first_present(&[address.country.as_deref()])
    }

    /// Convert into a candidate
    ///
    /// Label format is "City - Region (Country)" with absent parts omitted.
    /// Returns None when nothing usable could be extracted.
    pub fn to_candidate(&self) -> Option<LocationCandidate> {
        let city = self.city();

        let mut label = [city, self.region()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" - ");
        if let Some(country) = self.country() {
            if label.is_empty() {
                label = format!("({})", country);
            } else {
                label.push_str(&format!(" ({})", country));
            }
        }

        let value = city.map(str::to_string).unwrap_or_else(|| label.clone());
        if value.is_empty() {
            return None;
        }

        Some(LocationCandidate { value, label })
    }
}

#[cfg(test)]
#[path = "candidate_tests.rs"]
mod candidate_tests;
