//! Error types for the helpdesk system.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HelpdeskError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Connectivity error: {0}")]
    Connectivity(String),
}

impl HelpdeskError {
    /// Shorthand for the common not-found case.
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }
}

pub type HelpdeskResult<T> = Result<T, HelpdeskError>;
