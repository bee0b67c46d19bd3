//! In-memory storage implementation - used for tests and ephemeral sessions.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::warn;

use markblog_core::ports::{StorageBackend, StorageError};

/// In-memory key-value storage using a HashMap behind an async RwLock.
///
/// An optional capacity limit bounds the byte length of any stored value,
/// mirroring the quota a browser-style storage area enforces: an oversized
/// save is refused and the previous value is kept. Data is lost on process
/// exit.
pub struct InMemoryStorage {
    store: RwLock<HashMap<String, String>>,
    capacity: Option<usize>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
            capacity: None,
        }
    }

    /// Limit the byte length of any single stored value.
    pub fn with_capacity(limit: usize) -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
            capacity: Some(limit),
        }
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StorageBackend for InMemoryStorage {
    async fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.store.read().await.get(key).cloned())
    }

    async fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(limit) = self.capacity {
            if value.len() > limit {
                warn!(key, limit, size = value.len(), "refusing write over capacity limit");
                return Err(StorageError::CapacityExceeded { limit });
            }
        }
        self.store
            .write()
            .await
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
