//! Bloq (facility) model and DTOs.

use bloqit_core::error::CoreError;
use bloqit_core::types::{new_id, EntityId};
use bloqit_core::validation::{decode, FieldKind, FieldSpec, Schema};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Record;
use crate::store::Collection;

/// Fields a client must supply to create a bloq.
pub const CREATE_SCHEMA: Schema = Schema {
    fields: &[
        FieldSpec::required("title", FieldKind::Text),
        FieldSpec::required("address", FieldKind::Text),
    ],
};

/// Fields a client may change on an existing bloq.
pub const UPDATE_SCHEMA: Schema = Schema {
    fields: &[
        FieldSpec::optional("title", FieldKind::Text),
        FieldSpec::optional("address", FieldKind::Text),
    ],
};

/// A physical site containing lockers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bloq {
    pub id: EntityId,
    pub title: String,
    pub address: String,
    /// Stored keys this model does not declare, written back unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record for Bloq {
    const COLLECTION: Collection = Collection::Facilities;
    const ENTITY: &'static str = "Bloq";

    fn id(&self) -> &EntityId {
        &self.id
    }
}

/// DTO for creating a bloq.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBloq {
    pub title: String,
    pub address: String,
}

impl CreateBloq {
    /// Validate a raw request body against [`CREATE_SCHEMA`].
    pub fn from_json(input: &Value) -> Result<Self, CoreError> {
        decode(CREATE_SCHEMA.validate(input)?)
    }

    /// Build the record, assigning a fresh id.
    pub fn into_record(self) -> Bloq {
        Bloq {
            id: new_id(),
            title: self.title,
            address: self.address,
            extra: Map::new(),
        }
    }
}

/// DTO for partially updating a bloq.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateBloq {
    pub title: Option<String>,
    pub address: Option<String>,
}

impl UpdateBloq {
    /// Validate a raw patch body against [`UPDATE_SCHEMA`].
    pub fn from_json(input: &Value) -> Result<Self, CoreError> {
        decode(UPDATE_SCHEMA.validate(input)?)
    }

    /// Overwrite the supplied fields of `bloq`, keeping the rest.
    pub fn apply(self, bloq: &mut Bloq) {
        if let Some(title) = self.title {
            bloq.title = title;
        }
        if let Some(address) = self.address {
            bloq.address = address;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn partial_update_keeps_unspecified_fields() {
        let mut bloq = Bloq {
            id: "F1".into(),
            title: "Bloq 1".into(),
            address: "Loc 1".into(),
            extra: Map::new(),
        };
        UpdateBloq::from_json(&json!({"address": "Loc 2"}))
            .unwrap()
            .apply(&mut bloq);
        assert_eq!(bloq.title, "Bloq 1");
        assert_eq!(bloq.address, "Loc 2");
        assert_eq!(bloq.id, "F1");
    }

    #[test]
    fn id_is_not_a_client_field() {
        let err = CreateBloq::from_json(&json!({"id": "x", "title": "t", "address": "a"}))
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(v) if v.code() == "unrecognized_keys"));
    }
}
