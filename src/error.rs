use thiserror::Error;

/// Custom error types for tripmind
#[derive(Debug, Error)]
pub enum TripmindError {
    #[error("Invalid config: {0}")]
    ConfigParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
