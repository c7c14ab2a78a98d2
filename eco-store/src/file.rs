//! File-Backed Store
//!
//! One JSON file per key under a base directory. Keys are sanitized into
//! file names; an absent file reads as an absent key.

use crate::error::{StoreError, StoreResult};
use crate::store::KeyedStore;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;

/// File-backed keyed store
pub struct FileStore {
    /// Base path for payload files
    base_path: PathBuf,
}

impl FileStore {
    /// Create a new file store, creating the base directory if needed
    pub async fn new(base_path: impl Into<PathBuf>) -> StoreResult<Self> {
        let base_path = base_path.into();
        fs::create_dir_all(&base_path)
            .await
            .map_err(|e| StoreError::io("Failed to create store directory", e))?;
        Ok(Self { base_path })
    }

    /// Get the file path for a key
    fn path_for(&self, key: &str) -> PathBuf {
        let sanitized: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.base_path.join(format!("{sanitized}.json"))
    }
}

#[async_trait]
impl KeyedStore for FileStore {
    async fn get_raw(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let payload = fs::read_to_string(&path)
            .await
            .map_err(|e| StoreError::io("Failed to read payload file", e))?;
        Ok(Some(payload))
    }

    async fn put_raw(&self, key: &str, payload: String) -> StoreResult<()> {
        let path = self.path_for(key);
        fs::write(&path, payload)
            .await
            .map_err(|e| StoreError::io("Failed to write payload file", e))
    }
}
