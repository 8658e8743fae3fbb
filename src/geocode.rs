//! Live location lookup
//!
//! `GeocodeClient` talks to a Nominatim-style search endpoint and
//! `spawn_worker` runs it off the UI thread, tagging every response with the
//! id of the request that produced it.

use thiserror::Error;

mod client;
mod worker;

pub use client::{GeocodeClient, parse_candidates};
pub use worker::{LookupRequest, LookupResponse, spawn_worker};

/// Errors from the live lookup provider
///
/// None of these reach the user; the suggestion flow degrades to the
/// fallback catalog instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// Live lookups are turned off (offline mode or disabled in config)
    #[error("Live lookup disabled")]
    Disabled,

    /// Transport-level failure
    #[error("Network error: {0}")]
    Network(String),

    /// Provider answered with a non-success status
    #[error("Provider returned HTTP {0}")]
    Status(u16),

    /// The lookup worker is gone or never started
    #[error("Lookup worker unavailable")]
    WorkerUnavailable,
}
