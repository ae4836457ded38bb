use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use super::{Collection, CollectionStore, StoreError};

/// In-memory store. Every collection starts out empty.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<Collection, Vec<Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CollectionStore for MemoryStore {
    async fn load(&self, collection: Collection) -> Result<Vec<Value>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections.get(&collection).cloned().unwrap_or_default())
    }

    async fn save(&self, collection: Collection, records: Vec<Value>) -> Result<(), StoreError> {
        self.collections.write().await.insert(collection, records);
        Ok(())
    }
}
