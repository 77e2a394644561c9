//! Article aggregate domain model.
//!
//! # Responsibility
//! - Define the article value object materialized by the aggregate loader.
//! - Define the write-side request model used by repository mutations.
//!
//! # Invariants
//! - `categories` is derived from junction rows at load time; it is never
//!   stored as a native column.
//! - Construction is all-or-nothing: any field mismatch aborts with a typed
//!   error and no partial value.

use crate::model::category::Category;
use crate::model::fields::{self, DraftError, FieldError};
use rusqlite::types::Value;
use serde::{Deserialize, Serialize};

/// Immutable article value object with its linked categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub published: bool,
    /// Populated only through the aggregate load path. No ordering guarantee.
    pub categories: Vec<Category>,
}

impl Article {
    /// Constructs an article from raw SQL values plus pre-built categories.
    ///
    /// # Errors
    /// - `FieldError` naming the offending field when a scalar value is
    ///   `NULL` or has the wrong storage type (a text `published`, for
    ///   example, is rejected rather than coerced).
    pub fn from_row_values(
        id: Value,
        title: Value,
        published: Value,
        categories: Vec<Category>,
    ) -> Result<Self, FieldError> {
        Ok(Self {
            id: fields::require_integer("id", id)?,
            title: fields::require_text("title", title)?,
            published: fields::require_bool("published", published)?,
            categories,
        })
    }
}

/// Write-side request model for creating or replacing an article row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDraft {
    pub title: String,
    pub published: bool,
}

impl ArticleDraft {
    pub fn new(title: impl Into<String>, published: bool) -> Self {
        Self {
            title: title.into(),
            published,
        }
    }

    /// Checks write-side invariants before any SQL executes.
    ///
    /// `title` is NOT NULL in storage; an empty title is rejected here so
    /// the constraint surfaces as a validation error, not a storage error.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::EmptyField { field: "title" });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Article, ArticleDraft};
    use crate::model::category::Category;
    use crate::model::fields::{DraftError, FieldError};
    use rusqlite::types::Value;

    #[test]
    fn from_row_values_builds_full_aggregate() {
        let categories = vec![Category {
            id: 7,
            name: "rust".to_string(),
        }];
        let article = Article::from_row_values(
            Value::Integer(3),
            Value::Text("typed aggregates".to_string()),
            Value::Integer(1),
            categories.clone(),
        )
        .unwrap();

        assert_eq!(article.id, 3);
        assert_eq!(article.title, "typed aggregates");
        assert!(article.published);
        assert_eq!(article.categories, categories);
    }

    #[test]
    fn text_published_fails_with_field_name() {
        let err = Article::from_row_values(
            Value::Integer(1),
            Value::Text("title".to_string()),
            Value::Text("true".to_string()),
            Vec::new(),
        )
        .unwrap_err();
        assert!(matches!(err, FieldError::WrongType { field: "published", .. }));
    }

    #[test]
    fn null_title_fails_with_field_name() {
        let err = Article::from_row_values(
            Value::Integer(1),
            Value::Null,
            Value::Integer(0),
            Vec::new(),
        )
        .unwrap_err();
        assert_eq!(err, FieldError::Missing { field: "title" });
    }

    #[test]
    fn equality_is_value_semantics() {
        let left = Article {
            id: 1,
            title: "same".to_string(),
            published: false,
            categories: Vec::new(),
        };
        let mut right = left.clone();
        assert_eq!(left, right);

        right.published = true;
        assert_ne!(left, right);
    }

    #[test]
    fn draft_rejects_blank_title() {
        let err = ArticleDraft::new("", true).validate().unwrap_err();
        assert_eq!(err, DraftError::EmptyField { field: "title" });
    }
}
