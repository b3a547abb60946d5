//! Typed error enum for the service layer.

use recipebook_storage::StorageError;
use thiserror::Error;

/// Service-layer error unifying validation, lookup, and storage failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (DB error, missing row, etc.).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Referenced entity does not exist. `entity` is the display name
    /// used in API messages ("Recipe", "Ingredient").
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    /// Caller provided invalid input (missing name, empty ingredient list).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Candidate recipe matches an existing normalized ingredient set.
    #[error("duplicate: {0}")]
    Duplicate(String),
}

impl ServiceError {
    /// Whether this error represents a not-found condition.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::Storage(e) => e.is_not_found(),
            Self::InvalidInput(_) | Self::Duplicate(_) => false,
        }
    }

    /// Whether this error represents a duplicate ingredient set.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate(_))
    }
}
