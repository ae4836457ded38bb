//! Rent model and DTOs.

use bloqit_core::error::CoreError;
use bloqit_core::types::{new_id, EntityId, Timestamp};
use bloqit_core::validation::{decode, FieldKind, FieldSpec, Schema};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use super::status::{RentSize, RentStatus};
use super::Record;
use crate::store::Collection;

/// Parent reference that cannot change after creation.
pub const IMMUTABLE_FIELD: &str = "lockerId";

/// `id` and `createdAt` are server-assigned and not accepted here.
pub const CREATE_SCHEMA: Schema = Schema {
    fields: &[
        FieldSpec::required("lockerId", FieldKind::Identifier),
        FieldSpec::required("weight", FieldKind::PositiveNumber),
        FieldSpec::required("size", FieldKind::Enum(RentSize::VALUES)),
        FieldSpec::required("status", FieldKind::Enum(RentStatus::VALUES)),
        FieldSpec::optional("droppedOffAt", FieldKind::Timestamp),
        FieldSpec::optional("pickedUpAt", FieldKind::Timestamp),
    ],
};

pub const UPDATE_SCHEMA: Schema = Schema {
    fields: &[
        FieldSpec::optional("weight", FieldKind::PositiveNumber),
        FieldSpec::optional("size", FieldKind::Enum(RentSize::VALUES)),
        FieldSpec::optional("status", FieldKind::Enum(RentStatus::VALUES)),
        FieldSpec::optional("droppedOffAt", FieldKind::Timestamp),
        FieldSpec::optional("pickedUpAt", FieldKind::Timestamp),
    ],
};

/// A rental transaction bound to one locker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rent {
    pub id: EntityId,
    pub locker_id: EntityId,
    /// Kept as the JSON number the client sent, so `10` stays `10`.
    pub weight: Number,
    pub size: RentSize,
    pub status: RentStatus,
    pub created_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropped_off_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picked_up_at: Option<Timestamp>,
    /// Stored keys this model does not declare, written back unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record for Rent {
    const COLLECTION: Collection = Collection::Rents;
    const ENTITY: &'static str = "Rent";

    fn id(&self) -> &EntityId {
        &self.id
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRent {
    pub locker_id: EntityId,
    pub weight: Number,
    pub size: RentSize,
    pub status: RentStatus,
    pub dropped_off_at: Option<Timestamp>,
    pub picked_up_at: Option<Timestamp>,
}

impl CreateRent {
    pub fn from_json(input: &Value) -> Result<Self, CoreError> {
        decode(CREATE_SCHEMA.validate(input)?)
    }

    /// Build the record, assigning a fresh id and `created_at`.
    pub fn into_record(self, created_at: Timestamp) -> Rent {
        Rent {
            id: new_id(),
            locker_id: self.locker_id,
            weight: self.weight,
            size: self.size,
            status: self.status,
            created_at,
            dropped_off_at: self.dropped_off_at,
            picked_up_at: self.picked_up_at,
            extra: Map::new(),
        }
    }
}

/// Status changes are not transition-guarded.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRent {
    pub weight: Option<Number>,
    pub size: Option<RentSize>,
    pub status: Option<RentStatus>,
    pub dropped_off_at: Option<Timestamp>,
    pub picked_up_at: Option<Timestamp>,
}

impl UpdateRent {
    pub fn from_json(input: &Value) -> Result<Self, CoreError> {
        decode(UPDATE_SCHEMA.validate(input)?)
    }

    pub fn apply(self, rent: &mut Rent) {
        if let Some(weight) = self.weight {
            rent.weight = weight;
        }
        if let Some(size) = self.size {
            rent.size = size;
        }
        if let Some(status) = self.status {
            rent.status = status;
        }
        if let Some(at) = self.dropped_off_at {
            rent.dropped_off_at = Some(at);
        }
        if let Some(at) = self.picked_up_at {
            rent.picked_up_at = Some(at);
        }
    }
}
