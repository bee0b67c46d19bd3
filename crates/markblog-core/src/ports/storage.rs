use async_trait::async_trait;

/// Storage trait - abstraction over key-value persistence backends.
///
/// One key holds one opaque string value; the store serializes the whole
/// collection into a single value, so a backend never sees partial state.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Load the value stored under a key, if any.
    async fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value stored under a key.
    async fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Storage operation errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("backend operation failed: {0}")]
    Backend(String),

    #[error("capacity limit of {limit} bytes exceeded")]
    CapacityExceeded { limit: usize },
}
