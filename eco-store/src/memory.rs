//! In-Memory Store
//!
//! Keyed store backed by a process-local map. Used in tests and as the
//! default backend when no persistence is configured.

use crate::error::StoreResult;
use crate::store::KeyedStore;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory keyed store
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyedStore for MemoryStore {
    async fn get_raw(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn put_raw(&self, key: &str, payload: String) -> StoreResult<()> {
        self.entries.write().await.insert(key.to_string(), payload);
        Ok(())
    }
}
