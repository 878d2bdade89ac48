//! Store-specific error types and conversions.

use helpdesk_core::error::HelpdeskError;

/// Store-layer error type.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Store lock poisoned")]
    Poisoned,
}

impl From<StoreError> for HelpdeskError {
    fn from(err: StoreError) -> Self {
        HelpdeskError::Storage(err.to_string())
    }
}
