//! Repository for the `lockers` collection.

use bloqit_core::error::CoreError;
use serde_json::Value;

use super::{find, load_all, position, reject_immutable, remove, save_all};
use crate::error::RepoError;
use crate::models::bloq::Bloq;
use crate::models::locker::{CreateLocker, Locker, UpdateLocker, IMMUTABLE_FIELD};
use crate::models::rent::Rent;
use crate::models::Record;
use crate::repositories::BloqRepo;
use crate::store::CollectionStore;

/// Provides data access for lockers.
pub struct LockerRepo;

impl LockerRepo {
    pub async fn list(store: &dyn CollectionStore) -> Result<Vec<Locker>, RepoError> {
        load_all(store).await
    }

    pub async fn find_by_id(store: &dyn CollectionStore, id: &str) -> Result<Locker, RepoError> {
        find(store, id).await
    }

    /// Validate `input`, confirm the owning bloq exists, then append.
    ///
    /// A missing bloq is an `Integrity` error and nothing is written.
    pub async fn create(store: &dyn CollectionStore, input: &Value) -> Result<Locker, RepoError> {
        let dto = CreateLocker::from_json(input)?;

        if !BloqRepo::exists(store, &dto.facility_id).await? {
            return Err(CoreError::Integrity {
                entity: Bloq::ENTITY,
                id: dto.facility_id,
            }
            .into());
        }

        let locker = dto.into_record();
        let mut lockers: Vec<Locker> = load_all(store).await?;
        lockers.push(locker.clone());
        save_all(store, &lockers).await?;

        Ok(locker)
    }

    /// Merge the validated fields of `patch` over the stored locker.
    ///
    /// A patch naming `facilityId` fails before schema validation runs.
    pub async fn update(
        store: &dyn CollectionStore,
        id: &str,
        patch: &Value,
    ) -> Result<Locker, RepoError> {
        let mut lockers: Vec<Locker> = load_all(store).await?;
        let index = position(&lockers, id)?;

        reject_immutable(patch, IMMUTABLE_FIELD)?;
        UpdateLocker::from_json(patch)?.apply(&mut lockers[index]);
        save_all(store, &lockers).await?;

        Ok(lockers.swap_remove(index))
    }

    pub async fn delete(store: &dyn CollectionStore, id: &str) -> Result<(), RepoError> {
        remove::<Locker>(store, id).await
    }

    /// Rents bound to locker `id`. The locker itself must exist.
    pub async fn list_rents(store: &dyn CollectionStore, id: &str) -> Result<Vec<Rent>, RepoError> {
        Self::find_by_id(store, id).await?;

        let rents: Vec<Rent> = load_all(store).await?;
        Ok(rents.into_iter().filter(|rent| rent.locker_id == id).collect())
    }
}
