//! Eco-Rewards Store Error Types

use thiserror::Error;

/// Store Result type
pub type StoreResult<T> = Result<T, StoreError>;

/// Store Error
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backing store failure
    #[error("Backend error: {0}")]
    Backend(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl StoreError {
    /// Create a backend error from an I/O failure
    pub fn io(context: &str, err: std::io::Error) -> Self {
        Self::Backend(format!("{context}: {err}"))
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}
