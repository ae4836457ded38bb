use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;

use super::{Collection, CollectionStore, StoreError};

/// Stores each collection as a pretty-printed JSON array in
/// `<data_dir>/<collection>.json`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    data_dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the file backing `collection`.
    pub fn collection_path(&self, collection: Collection) -> PathBuf {
        self.data_dir.join(format!("{}.json", collection.name()))
    }

    /// Create the data directory and seed any missing collection file with
    /// an empty array. Existing files are left untouched.
    pub async fn ensure_collections(&self) -> Result<(), StoreError> {
        for collection in Collection::ALL {
            tokio::fs::create_dir_all(&self.data_dir)
                .await
                .map_err(|source| StoreError::Write { collection, source })?;

            let path = self.collection_path(collection);
            let exists = tokio::fs::try_exists(&path)
                .await
                .map_err(|source| StoreError::Read { collection, source })?;
            if !exists {
                tokio::fs::write(&path, b"[]")
                    .await
                    .map_err(|source| StoreError::Write { collection, source })?;
                tracing::info!(collection = %collection, path = %path.display(), "Seeded empty collection");
            }
        }
        Ok(())
    }
}

#[async_trait]
impl CollectionStore for JsonFileStore {
    async fn load(&self, collection: Collection) -> Result<Vec<Value>, StoreError> {
        let path = self.collection_path(collection);
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|source| StoreError::Read { collection, source })?;
        let records: Vec<Value> = serde_json::from_slice(&bytes)
            .map_err(|source| StoreError::Malformed { collection, source })?;
        tracing::debug!(collection = %collection, count = records.len(), "Loaded collection");
        Ok(records)
    }

    async fn save(&self, collection: Collection, records: Vec<Value>) -> Result<(), StoreError> {
        let path = self.collection_path(collection);
        let bytes = serde_json::to_vec_pretty(&records)
            .map_err(|source| StoreError::Encode { collection, source })?;
        let dir = self.data_dir.clone();
        tokio::task::spawn_blocking(move || replace_file(&dir, &path, &bytes))
            .await
            .map_err(|e| StoreError::Write {
                collection,
                source: std::io::Error::other(e),
            })?
            .map_err(|source| StoreError::Write { collection, source })?;
        tracing::debug!(collection = %collection, count = records.len(), "Saved collection");
        Ok(())
    }
}

/// Write `bytes` to a temporary file in `dir`, then rename it over `path`.
///
/// Readers see either the previous contents or the new ones, never a
/// truncated file.
fn replace_file(dir: &Path, path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = tempfile::NamedTempFile::new_in(dir)?;
    file.write_all(bytes)?;
    file.as_file().sync_all()?;
    file.persist(path)?;
    Ok(())
}
