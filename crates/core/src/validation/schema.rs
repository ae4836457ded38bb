//! Declarative field schemas and the first-violation validator.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::identifier::is_valid_identifier;
use super::violation::{json_type_name, FieldViolation};
use crate::error::CoreError;

/// Constraint applied to a single field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Any JSON string.
    Text,
    /// A string in entity identifier format.
    Identifier,
    Boolean,
    /// A JSON number strictly greater than zero.
    PositiveNumber,
    /// One of a closed set of strings, listed in declaration order.
    Enum(&'static [&'static str]),
    /// An RFC 3339 timestamp string.
    Timestamp,
}

/// A named field within a [`Schema`].
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }
}

/// An object schema: the complete set of keys a body may carry.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    pub fields: &'static [FieldSpec],
}

impl Schema {
    /// Validate `input` and return the accepted fields.
    ///
    /// Checks, in order: the body is an object, each declared field in
    /// declaration order, then undeclared keys. Returns the first failure.
    pub fn validate(&self, input: &Value) -> Result<Map<String, Value>, FieldViolation> {
        let Value::Object(object) = input else {
            return Err(FieldViolation::invalid_type(
                Vec::new(),
                "object",
                json_type_name(input),
            ));
        };

        let mut accepted = Map::new();
        for field in self.fields {
            match object.get(field.name) {
                None if field.required => {
                    return Err(FieldViolation::invalid_type(
                        vec![field.name.to_string()],
                        expected_type(field.kind),
                        "undefined",
                    ));
                }
                None => {}
                Some(value) => {
                    check_value(field, value)?;
                    accepted.insert(field.name.to_string(), value.clone());
                }
            }
        }

        let unknown: Vec<String> = object
            .keys()
            .filter(|key| !self.declares(key))
            .cloned()
            .collect();
        if !unknown.is_empty() {
            return Err(FieldViolation::unrecognized_keys(unknown));
        }

        Ok(accepted)
    }

    /// Whether `name` is one of this schema's fields.
    pub fn declares(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }
}

/// Decode a validated field map into a typed DTO.
///
/// The map has already passed [`Schema::validate`], so a failure here means
/// the schema and the DTO disagree.
pub fn decode<T: DeserializeOwned>(fields: Map<String, Value>) -> Result<T, CoreError> {
    serde_json::from_value(Value::Object(fields))
        .map_err(|e| CoreError::Internal(format!("Validated input failed to decode: {e}")))
}

fn expected_type(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Text | FieldKind::Identifier | FieldKind::Enum(_) | FieldKind::Timestamp => {
            "string"
        }
        FieldKind::Boolean => "boolean",
        FieldKind::PositiveNumber => "number",
    }
}

fn check_value(field: &FieldSpec, value: &Value) -> Result<(), FieldViolation> {
    let path = || vec![field.name.to_string()];

    if let FieldKind::Enum(options) = field.kind {
        return match value.as_str() {
            Some(s) if options.contains(&s) => Ok(()),
            _ => Err(FieldViolation::invalid_enum_value(path(), options, value)),
        };
    }

    let type_matches = match field.kind {
        FieldKind::Boolean => value.is_boolean(),
        FieldKind::PositiveNumber => value.is_number(),
        _ => value.is_string(),
    };
    if !type_matches {
        return Err(FieldViolation::invalid_type(
            path(),
            expected_type(field.kind),
            json_type_name(value),
        ));
    }

    match field.kind {
        FieldKind::Identifier => {
            let s = value.as_str().unwrap_or_default();
            if !is_valid_identifier(s) {
                return Err(FieldViolation::invalid_string(path(), "identifier", value));
            }
        }
        FieldKind::PositiveNumber => {
            let n = value.as_f64().unwrap_or_default();
            if n <= 0.0 {
                return Err(FieldViolation::not_greater_than(path(), 0, value));
            }
        }
        FieldKind::Timestamp => {
            let s = value.as_str().unwrap_or_default();
            if chrono::DateTime::parse_from_rfc3339(s).is_err() {
                return Err(FieldViolation::invalid_string(path(), "datetime", value));
            }
        }
        FieldKind::Text | FieldKind::Boolean | FieldKind::Enum(_) => {}
    }

    Ok(())
}
