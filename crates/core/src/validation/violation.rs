//! Structured description of a single rejected field.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// The first violation found while validating a request body.
///
/// Serializes flat, e.g.
/// `{"code":"invalid_enum_value","options":["OPEN","CLOSED"],"received":"X","message":"...","path":["status"]}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldViolation {
    #[serde(flatten)]
    pub kind: ViolationKind,
    pub message: String,
    pub path: Vec<String>,
}

/// What constraint was broken, with the constraint-specific detail.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum ViolationKind {
    /// Wrong JSON type, or a required field is missing.
    ///
    /// Both sides are JSON type names (see [`json_type_name`]), not values;
    /// an absent field is reported as `received: "undefined"`.
    InvalidType {
        expected: &'static str,
        received: &'static str,
    },
    /// Value is not one of the allowed enum members.
    InvalidEnumValue {
        options: Vec<&'static str>,
        received: Value,
    },
    /// A string failed a format check (`identifier`, `datetime`).
    InvalidString {
        validation: &'static str,
        received: Value,
    },
    /// A number is below its lower bound.
    TooSmall {
        minimum: i64,
        inclusive: bool,
        received: Value,
    },
    /// The body carries keys the schema does not declare.
    UnrecognizedKeys { keys: Vec<String> },
}

impl FieldViolation {
    pub fn invalid_type(path: Vec<String>, expected: &'static str, received: &'static str) -> Self {
        let message = if received == "undefined" {
            "Required".to_string()
        } else {
            format!("Expected {expected}, received {received}")
        };
        Self {
            kind: ViolationKind::InvalidType { expected, received },
            message,
            path,
        }
    }

    pub fn invalid_enum_value(
        path: Vec<String>,
        options: &'static [&'static str],
        received: &Value,
    ) -> Self {
        let expected = options
            .iter()
            .map(|o| format!("'{o}'"))
            .collect::<Vec<_>>()
            .join(" | ");
        let shown = match received {
            Value::String(s) => format!("'{s}'"),
            other => other.to_string(),
        };
        Self {
            kind: ViolationKind::InvalidEnumValue {
                options: options.to_vec(),
                received: received.clone(),
            },
            message: format!("Invalid enum value. Expected {expected}, received {shown}"),
            path,
        }
    }

    pub fn invalid_string(path: Vec<String>, validation: &'static str, received: &Value) -> Self {
        Self {
            kind: ViolationKind::InvalidString {
                validation,
                received: received.clone(),
            },
            message: format!("Invalid {validation}"),
            path,
        }
    }

    /// Exclusive lower bound violation (`value > minimum` required).
    pub fn not_greater_than(path: Vec<String>, minimum: i64, received: &Value) -> Self {
        Self {
            kind: ViolationKind::TooSmall {
                minimum,
                inclusive: false,
                received: received.clone(),
            },
            message: format!("Number must be greater than {minimum}"),
            path,
        }
    }

    pub fn unrecognized_keys(keys: Vec<String>) -> Self {
        let listed = keys
            .iter()
            .map(|k| format!("'{k}'"))
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            kind: ViolationKind::UnrecognizedKeys { keys },
            message: format!("Unrecognized key(s) in object: {listed}"),
            path: Vec::new(),
        }
    }

    /// The wire code of this violation (`invalid_type`, `too_small`, ...).
    pub fn code(&self) -> &'static str {
        match self.kind {
            ViolationKind::InvalidType { .. } => "invalid_type",
            ViolationKind::InvalidEnumValue { .. } => "invalid_enum_value",
            ViolationKind::InvalidString { .. } => "invalid_string",
            ViolationKind::TooSmall { .. } => "too_small",
            ViolationKind::UnrecognizedKeys { .. } => "unrecognized_keys",
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path.join("."), self.message)
        }
    }
}

/// JSON type name as reported in `invalid_type` violations.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
