//! Repository layer (entity services).
//!
//! Each repository is a zero-sized struct providing async CRUD methods that
//! accept `&dyn CollectionStore` as the first argument. Mutations load the
//! whole collection, change it in memory and save it back.

pub mod bloq_repo;
pub mod locker_repo;
pub mod rent_repo;

pub use bloq_repo::BloqRepo;
pub use locker_repo::LockerRepo;
pub use rent_repo::RentRepo;

use bloqit_core::error::CoreError;
use serde_json::Value;

use crate::error::RepoError;
use crate::models::Record;
use crate::store::{load_records, save_records, CollectionStore};

/// Load the full collection for `T`.
pub(crate) async fn load_all<T: Record>(store: &dyn CollectionStore) -> Result<Vec<T>, RepoError> {
    Ok(load_records(store, T::COLLECTION).await?)
}

/// Overwrite the full collection for `T`.
pub(crate) async fn save_all<T: Record>(
    store: &dyn CollectionStore,
    records: &[T],
) -> Result<(), RepoError> {
    Ok(save_records(store, T::COLLECTION, records).await?)
}

/// Index of the record with `id`, or `NotFound`.
pub(crate) fn position<T: Record>(records: &[T], id: &str) -> Result<usize, CoreError> {
    records
        .iter()
        .position(|r| r.id() == id)
        .ok_or_else(|| not_found::<T>(id))
}

pub(crate) fn not_found<T: Record>(id: &str) -> CoreError {
    CoreError::NotFound {
        entity: T::ENTITY,
        id: id.to_string(),
    }
}

/// Load the collection and return the record with `id`.
pub(crate) async fn find<T: Record>(store: &dyn CollectionStore, id: &str) -> Result<T, RepoError> {
    let mut records = load_all::<T>(store).await?;
    let index = position(&records, id)?;
    Ok(records.swap_remove(index))
}

/// Remove the record with `id`, preserving the order of the others.
pub(crate) async fn remove<T: Record>(store: &dyn CollectionStore, id: &str) -> Result<(), RepoError> {
    let mut records = load_all::<T>(store).await?;
    let index = position(&records, id)?;
    records.remove(index);
    save_all(store, &records).await
}

/// Fail with `ImmutableField` when a patch body carries `field` at all.
pub(crate) fn reject_immutable(patch: &Value, field: &'static str) -> Result<(), CoreError> {
    match patch.as_object() {
        Some(object) if object.contains_key(field) => Err(CoreError::ImmutableField { field }),
        _ => Ok(()),
    }
}
