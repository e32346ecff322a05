//! Typed error enum for the service layer.
//!
//! Callers match on failure modes (missing lead, bad input, storage failure)
//! instead of downcasting opaque errors.

use leadline_storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (DB, pool, not found, etc.).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Caller provided invalid input (blank chat message, unknown enum value).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl ServiceError {
    pub(crate) fn lead_not_found(id: &str) -> Self {
        Self::Storage(StorageError::NotFound { entity: "lead", id: id.to_owned() })
    }

    /// Whether this error represents a not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_not_found())
    }
}
