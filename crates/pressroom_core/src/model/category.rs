//! Category domain model.
//!
//! # Invariants
//! - `id` is the stable storage identity; values never mutate after
//!   construction.
//! - Equality is value semantics over all fields.

use crate::model::fields::{self, DraftError, FieldError};
use rusqlite::types::Value;
use serde::{Deserialize, Serialize};

/// Immutable category value object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

impl Category {
    /// Constructs a category from raw SQL values.
    ///
    /// # Errors
    /// - `FieldError` naming the offending field when a value is `NULL` or
    ///   has the wrong storage type.
    pub fn from_row_values(id: Value, name: Value) -> Result<Self, FieldError> {
        Ok(Self {
            id: fields::require_integer("id", id)?,
            name: fields::require_text("name", name)?,
        })
    }
}

/// Write-side request model for creating a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDraft {
    pub name: String,
}

impl CategoryDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Checks write-side invariants before any SQL executes.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.name.trim().is_empty() {
            return Err(DraftError::EmptyField { field: "name" });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Category, CategoryDraft};
    use crate::model::fields::{DraftError, FieldError};
    use rusqlite::types::Value;

    #[test]
    fn from_row_values_builds_category() {
        let category =
            Category::from_row_values(Value::Integer(1), Value::Text("dry-rb".to_string()))
                .unwrap();
        assert_eq!(
            category,
            Category {
                id: 1,
                name: "dry-rb".to_string()
            }
        );
    }

    #[test]
    fn null_name_is_a_missing_field() {
        let err = Category::from_row_values(Value::Integer(1), Value::Null).unwrap_err();
        assert_eq!(err, FieldError::Missing { field: "name" });
    }

    #[test]
    fn draft_rejects_blank_name() {
        let err = CategoryDraft::new("  ").validate().unwrap_err();
        assert_eq!(err, DraftError::EmptyField { field: "name" });
    }
}
