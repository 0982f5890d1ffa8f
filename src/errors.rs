use thiserror::Error;

/// Error type that captures common back-office failures.
#[derive(Debug, Error)]
pub enum ClubError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Currency mismatch: {0} vs {1}")]
    CurrencyMismatch(String, String),
}
