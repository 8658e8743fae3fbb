mod candidate;
mod catalog;
mod merge;
mod normalize;

pub use candidate::{LocationCandidate, ProviderAddress, ProviderRecord};
pub use catalog::{DEFAULT_CITIES, FallbackCatalog};
pub use merge::{MAX_SUGGESTIONS, dedupe, merge};
pub use normalize::{identity_key, normalize};
