//! Persistence and entity services for bloqs, lockers and rents.
//!
//! Collections are loaded and saved whole through a [`CollectionStore`];
//! repositories implement the read-modify-write protocol on top of it.

pub mod error;
pub mod models;
pub mod repositories;
pub mod store;

pub use error::RepoError;
pub use store::{Collection, CollectionStore, JsonFileStore, MemoryStore, StoreError};

/// Verify every collection can be loaded from the store.
pub async fn health_check(store: &dyn CollectionStore) -> Result<(), StoreError> {
    for collection in Collection::ALL {
        store.load(collection).await?;
    }
    Ok(())
}
