//! Domain-level error types.

use thiserror::Error;

use crate::ports::StorageError;

/// Store errors - the outcomes a caller is expected to handle.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A draft field was empty after trimming. Recoverable by re-prompting.
    #[error("validation failed: {0}")]
    Validation(String),

    /// An update named an id that is not in the collection.
    #[error("post not found: {id}")]
    NotFound { id: String },

    /// The backend refused a write or failed at the I/O level.
    #[error("storage backend failed: {0}")]
    Storage(#[from] StorageError),
}
