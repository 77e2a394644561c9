//! Strict coercion from raw SQL values into domain field types.
//!
//! # Responsibility
//! - Convert `rusqlite::types::Value` into `i64`/`String`/`bool` with no
//!   silent defaulting.
//! - Report the offending field by name on any mismatch.
//!
//! # Invariants
//! - `NULL` is always a missing field, never a default.
//! - Booleans accept only the SQLite integers 0 and 1.

use rusqlite::types::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Strict construction failure for a single domain field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    Missing {
        field: &'static str,
    },
    WrongType {
        field: &'static str,
        expected: &'static str,
        got: String,
    },
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "field `{field}` is missing"),
            Self::WrongType {
                field,
                expected,
                got,
            } => write!(f, "field `{field}` expected {expected}, got {got}"),
        }
    }
}

impl Error for FieldError {}

/// Validation failure for a write-side request model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    EmptyField { field: &'static str },
}

impl Display for DraftError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField { field } => write!(f, "required field `{field}` is empty"),
        }
    }
}

impl Error for DraftError {}

/// Coerces a raw value into an integer field.
pub fn require_integer(field: &'static str, value: Value) -> Result<i64, FieldError> {
    match value {
        Value::Integer(number) => Ok(number),
        Value::Null => Err(FieldError::Missing { field }),
        other => Err(wrong_type(field, "integer", &other)),
    }
}

/// Coerces a raw value into a text field.
pub fn require_text(field: &'static str, value: Value) -> Result<String, FieldError> {
    match value {
        Value::Text(text) => Ok(text),
        Value::Null => Err(FieldError::Missing { field }),
        other => Err(wrong_type(field, "text", &other)),
    }
}

/// Coerces a raw value into a boolean field (SQLite integer 0/1).
pub fn require_bool(field: &'static str, value: Value) -> Result<bool, FieldError> {
    match value {
        Value::Integer(0) => Ok(false),
        Value::Integer(1) => Ok(true),
        Value::Integer(other) => Err(FieldError::WrongType {
            field,
            expected: "boolean (0 or 1)",
            got: format!("integer {other}"),
        }),
        Value::Null => Err(FieldError::Missing { field }),
        other => Err(wrong_type(field, "boolean (0 or 1)", &other)),
    }
}

fn wrong_type(field: &'static str, expected: &'static str, got: &Value) -> FieldError {
    FieldError::WrongType {
        field,
        expected,
        got: storage_type_name(got).to_string(),
    }
}

fn storage_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Integer(_) => "integer",
        Value::Real(_) => "real",
        Value::Text(_) => "text",
        Value::Blob(_) => "blob",
    }
}

#[cfg(test)]
mod tests {
    use super::{require_bool, require_integer, require_text, FieldError};
    use rusqlite::types::Value;

    #[test]
    fn null_is_reported_as_missing_with_field_name() {
        let err = require_text("title", Value::Null).unwrap_err();
        assert_eq!(err, FieldError::Missing { field: "title" });
    }

    #[test]
    fn text_is_rejected_for_boolean_fields() {
        let err = require_bool("published", Value::Text("true".to_string())).unwrap_err();
        match err {
            FieldError::WrongType { field, got, .. } => {
                assert_eq!(field, "published");
                assert_eq!(got, "text");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn boolean_accepts_only_zero_and_one() {
        assert_eq!(require_bool("published", Value::Integer(0)), Ok(false));
        assert_eq!(require_bool("published", Value::Integer(1)), Ok(true));
        assert!(require_bool("published", Value::Integer(2)).is_err());
    }

    #[test]
    fn integer_field_rejects_real_values() {
        let err = require_integer("id", Value::Real(1.5)).unwrap_err();
        assert!(matches!(err, FieldError::WrongType { field: "id", .. }));
    }
}
