//! Storage accessor: whole-collection load and save.
//!
//! There is no partial access and no locking. Two requests that both load,
//! mutate and save the same collection race, and the later save wins.

mod json_file;
mod memory;

use std::fmt;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// A named, persisted collection of records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Facilities,
    Lockers,
    Rents,
}

impl Collection {
    pub const ALL: [Collection; 3] = [Self::Facilities, Self::Lockers, Self::Rents];

    pub fn name(self) -> &'static str {
        match self {
            Self::Facilities => "facilities",
            Self::Lockers => "lockers",
            Self::Rents => "rents",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read collection '{collection}': {source}")]
    Read {
        collection: Collection,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write collection '{collection}': {source}")]
    Write {
        collection: Collection,
        #[source]
        source: std::io::Error,
    },

    #[error("Collection '{collection}' is malformed: {source}")]
    Malformed {
        collection: Collection,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode collection '{collection}': {source}")]
    Encode {
        collection: Collection,
        #[source]
        source: serde_json::Error,
    },
}

/// Loads and saves entire collections.
///
/// `save` replaces the previous contents of the collection.
#[async_trait]
pub trait CollectionStore: Send + Sync {
    async fn load(&self, collection: Collection) -> Result<Vec<Value>, StoreError>;

    async fn save(&self, collection: Collection, records: Vec<Value>) -> Result<(), StoreError>;
}

/// Load a collection and decode every record as `T`.
pub async fn load_records<T: DeserializeOwned>(
    store: &dyn CollectionStore,
    collection: Collection,
) -> Result<Vec<T>, StoreError> {
    let values = store.load(collection).await?;
    serde_json::from_value(Value::Array(values))
        .map_err(|source| StoreError::Malformed { collection, source })
}

/// Encode `records` and save them as the full contents of `collection`.
pub async fn save_records<T: Serialize>(
    store: &dyn CollectionStore,
    collection: Collection,
    records: &[T],
) -> Result<(), StoreError> {
    let values = records
        .iter()
        .map(serde_json::to_value)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| StoreError::Encode { collection, source })?;
    store.save(collection, values).await
}
