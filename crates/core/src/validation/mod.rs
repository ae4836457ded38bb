//! Schema validation engine for JSON request bodies.
//!
//! Each entity declares a creation [`Schema`] and a relaxed update
//! [`Schema`]. Validation walks the raw JSON object in field declaration
//! order and stops at the first [`FieldViolation`]; the accepted field map
//! is then decoded into a typed DTO with [`decode`].

pub mod identifier;
pub mod schema;
pub mod violation;

pub use identifier::is_valid_identifier;
pub use schema::{decode, FieldKind, FieldSpec, Schema};
pub use violation::{json_type_name, FieldViolation, ViolationKind};
