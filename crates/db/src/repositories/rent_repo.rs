//! Repository for the `rents` collection.

use serde_json::Value;

use super::{find, load_all, not_found, position, reject_immutable, remove, save_all};
use crate::error::RepoError;
use crate::models::locker::Locker;
use crate::models::rent::{CreateRent, Rent, UpdateRent, IMMUTABLE_FIELD};
use crate::store::CollectionStore;

/// Provides data access for rents.
pub struct RentRepo;

impl RentRepo {
    pub async fn list(store: &dyn CollectionStore) -> Result<Vec<Rent>, RepoError> {
        load_all(store).await
    }

    pub async fn find_by_id(store: &dyn CollectionStore, id: &str) -> Result<Rent, RepoError> {
        find(store, id).await
    }

    /// Validate `input`, assign an id and `createdAt`, then append.
    ///
    /// The referenced locker is not looked up.
    pub async fn create(store: &dyn CollectionStore, input: &Value) -> Result<Rent, RepoError> {
        let rent = CreateRent::from_json(input)?.into_record(chrono::Utc::now());

        let mut rents: Vec<Rent> = load_all(store).await?;
        rents.push(rent.clone());
        save_all(store, &rents).await?;

        Ok(rent)
    }

    /// Merge the validated fields of `patch` over the stored rent.
    ///
    /// A patch naming `lockerId` fails before schema validation runs.
    pub async fn update(
        store: &dyn CollectionStore,
        id: &str,
        patch: &Value,
    ) -> Result<Rent, RepoError> {
        let mut rents: Vec<Rent> = load_all(store).await?;
        let index = position(&rents, id)?;

        reject_immutable(patch, IMMUTABLE_FIELD)?;
        UpdateRent::from_json(patch)?.apply(&mut rents[index]);
        save_all(store, &rents).await?;

        Ok(rents.swap_remove(index))
    }

    pub async fn delete(store: &dyn CollectionStore, id: &str) -> Result<(), RepoError> {
        remove::<Rent>(store, id).await
    }

    /// The locker rent `id` is bound to.
    ///
    /// A dangling `lockerId` is reported as `Locker not found`.
    pub async fn find_locker(store: &dyn CollectionStore, id: &str) -> Result<Locker, RepoError> {
        let rent = Self::find_by_id(store, id).await?;

        let lockers: Vec<Locker> = load_all(store).await?;
        lockers
            .into_iter()
            .find(|locker| locker.id == rent.locker_id)
            .ok_or_else(|| not_found::<Locker>(&rent.locker_id).into())
    }
}
