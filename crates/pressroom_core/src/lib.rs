//! Core library for the pressroom demo: SQLite-backed articles joined to
//! categories through a junction table, materialized as strict typed values.
//! This crate is the single source of truth for schema and mapping rules.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::article::{Article, ArticleDraft};
pub use model::category::{Category, CategoryDraft};
pub use model::fields::{DraftError, FieldError};
pub use repo::article_repo::{ArticleRepository, SqliteArticleRepository};
pub use repo::category_repo::{CategoryRepository, SqliteCategoryRepository};
pub use repo::{RepoError, RepoResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
