//! Locker model and DTOs.

use bloqit_core::error::CoreError;
use bloqit_core::types::{new_id, EntityId};
use bloqit_core::validation::{decode, FieldKind, FieldSpec, Schema};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::status::LockerStatus;
use super::Record;
use crate::store::Collection;

/// Parent reference that cannot change after creation.
pub const IMMUTABLE_FIELD: &str = "facilityId";

pub const CREATE_SCHEMA: Schema = Schema {
    fields: &[
        FieldSpec::required("facilityId", FieldKind::Identifier),
        FieldSpec::required("status", FieldKind::Enum(LockerStatus::VALUES)),
        FieldSpec::required("isOccupied", FieldKind::Boolean),
    ],
};

/// Update schema. `facilityId` is deliberately absent.
pub const UPDATE_SCHEMA: Schema = Schema {
    fields: &[
        FieldSpec::optional("status", FieldKind::Enum(LockerStatus::VALUES)),
        FieldSpec::optional("isOccupied", FieldKind::Boolean),
    ],
};

/// A storage unit belonging to exactly one bloq.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Locker {
    pub id: EntityId,
    /// Owning bloq. Checked only when the locker is created.
    pub facility_id: EntityId,
    pub status: LockerStatus,
    pub is_occupied: bool,
    /// Stored keys this model does not declare, written back unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record for Locker {
    const COLLECTION: Collection = Collection::Lockers;
    const ENTITY: &'static str = "Locker";

    fn id(&self) -> &EntityId {
        &self.id
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLocker {
    pub facility_id: EntityId,
    pub status: LockerStatus,
    pub is_occupied: bool,
}

impl CreateLocker {
    pub fn from_json(input: &Value) -> Result<Self, CoreError> {
        decode(CREATE_SCHEMA.validate(input)?)
    }

    pub fn into_record(self) -> Locker {
        Locker {
            id: new_id(),
            facility_id: self.facility_id,
            status: self.status,
            is_occupied: self.is_occupied,
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLocker {
    pub status: Option<LockerStatus>,
    pub is_occupied: Option<bool>,
}

impl UpdateLocker {
    pub fn from_json(input: &Value) -> Result<Self, CoreError> {
        decode(UPDATE_SCHEMA.validate(input)?)
    }

    pub fn apply(self, locker: &mut Locker) {
        if let Some(status) = self.status {
            locker.status = status;
        }
        if let Some(is_occupied) = self.is_occupied {
            locker.is_occupied = is_occupied;
        }
    }
}
