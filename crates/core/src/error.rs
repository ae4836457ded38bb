use crate::types::EntityId;
use crate::validation::FieldViolation;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The target of a read, update, delete or relationship lookup is absent.
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: EntityId },

    /// Input failed schema validation. Only the first violation is carried.
    #[error("Validation failed: {0}")]
    Validation(FieldViolation),

    /// An update tried to change a protected parent reference.
    #[error("Updating {field} is not allowed")]
    ImmutableField { field: &'static str },

    /// A referenced parent entity does not exist at creation time.
    #[error("{entity} not found")]
    Integrity { entity: &'static str, id: EntityId },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<FieldViolation> for CoreError {
    fn from(violation: FieldViolation) -> Self {
        CoreError::Validation(violation)
    }
}
