//! Entity records, request DTOs and their validation schemas.
//!
//! Each submodule contains:
//! - A `Serialize + Deserialize` record struct matching the persisted shape
//! - A create DTO decoded from a body that passed `CREATE_SCHEMA`
//! - An update DTO (all `Option` fields) decoded from `UPDATE_SCHEMA`

pub mod bloq;
pub mod locker;
pub mod rent;
pub mod status;

use bloqit_core::types::EntityId;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::store::Collection;

/// A record persisted in its own collection and addressed by `id`.
pub trait Record: Serialize + DeserializeOwned + Send + Sync {
    /// Collection the record lives in.
    const COLLECTION: Collection;
    /// Entity name used in not-found messages (`"Bloq not found"`).
    const ENTITY: &'static str;

    fn id(&self) -> &EntityId;
}
