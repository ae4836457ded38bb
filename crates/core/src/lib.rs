//! Pure domain logic for the Bloqit locker service.
//!
//! No I/O lives here: identifier and timestamp types, the error taxonomy
//! shared by every layer, and the JSON schema validation engine used by the
//! entity models.

pub mod error;
pub mod types;
pub mod validation;
