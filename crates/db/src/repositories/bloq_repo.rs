//! Repository for the `facilities` collection.

use bloqit_core::types::EntityId;
use serde_json::Value;

use super::{find, load_all, position, remove, save_all};
use crate::error::RepoError;
use crate::models::bloq::{Bloq, CreateBloq, UpdateBloq};
use crate::models::locker::Locker;
use crate::store::CollectionStore;

/// Provides data access for bloqs.
pub struct BloqRepo;

impl BloqRepo {
    /// List every bloq in stored order.
    pub async fn list(store: &dyn CollectionStore) -> Result<Vec<Bloq>, RepoError> {
        load_all(store).await
    }

    /// Find a bloq by id, or `NotFound`.
    pub async fn find_by_id(store: &dyn CollectionStore, id: &str) -> Result<Bloq, RepoError> {
        find(store, id).await
    }

    /// Validate `input`, assign an id and append the new bloq.
    pub async fn create(store: &dyn CollectionStore, input: &Value) -> Result<Bloq, RepoError> {
        let bloq = CreateBloq::from_json(input)?.into_record();

        let mut bloqs: Vec<Bloq> = load_all(store).await?;
        bloqs.push(bloq.clone());
        save_all(store, &bloqs).await?;

        Ok(bloq)
    }

    /// Merge the validated fields of `patch` over the stored bloq.
    pub async fn update(
        store: &dyn CollectionStore,
        id: &str,
        patch: &Value,
    ) -> Result<Bloq, RepoError> {
        let mut bloqs: Vec<Bloq> = load_all(store).await?;
        let index = position(&bloqs, id)?;

        UpdateBloq::from_json(patch)?.apply(&mut bloqs[index]);
        save_all(store, &bloqs).await?;

        Ok(bloqs.swap_remove(index))
    }

    pub async fn delete(store: &dyn CollectionStore, id: &str) -> Result<(), RepoError> {
        remove::<Bloq>(store, id).await
    }

    /// Lockers whose `facilityId` is `id`. The bloq itself must exist.
    pub async fn list_lockers(
        store: &dyn CollectionStore,
        id: &str,
    ) -> Result<Vec<Locker>, RepoError> {
        Self::find_by_id(store, id).await?;

        let lockers: Vec<Locker> = load_all(store).await?;
        Ok(lockers
            .into_iter()
            .filter(|locker| locker.facility_id == id)
            .collect())
    }

    /// Whether a bloq with `id` exists.
    pub async fn exists(store: &dyn CollectionStore, id: &EntityId) -> Result<bool, RepoError> {
        let bloqs: Vec<Bloq> = load_all(store).await?;
        Ok(bloqs.iter().any(|bloq| &bloq.id == id))
    }
}
