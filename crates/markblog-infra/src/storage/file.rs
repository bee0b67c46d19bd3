//! File-backed storage - one UTF-8 document per key under a root directory.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use markblog_core::ports::{StorageBackend, StorageError};

/// Stores each key as a `.json` file under `root`.
///
/// The directory is created on first write; an absent file reads as an
/// absent value. Writes replace the whole file, matching the port's
/// overwrite semantics.
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    // Keys are caller-chosen strings; anything outside [A-Za-z0-9._-] maps
    // to '_' so a key can never escape the root directory.
    fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.root.join(format!("{name}.json"))
    }
}

#[async_trait]
impl StorageBackend for FileStorage {
    async fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::Backend(err.to_string())),
        }
    }

    async fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)
            .await
            .map_err(|err| StorageError::Backend(err.to_string()))?;
        fs::write(self.path_for(key), value)
            .await
            .map_err(|err| StorageError::Backend(err.to_string()))
    }
}
