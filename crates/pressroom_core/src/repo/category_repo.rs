//! Category repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the typed write path for category rows and junction links.
//!
//! # Invariants
//! - Link rows rely on the connection's `foreign_keys=ON`; a dangling
//!   article or category id surfaces as a storage error, never a silent row.

use crate::model::category::{Category, CategoryDraft};
use crate::repo::{RepoError, RepoResult};
use rusqlite::types::Value;
use rusqlite::{params, Connection};

/// Repository interface for categories and article links.
pub trait CategoryRepository {
    /// Inserts one category row and returns its generated id.
    fn create(&self, draft: &CategoryDraft) -> RepoResult<i64>;
    /// Links an article to a category and returns the junction row id.
    fn link_article(&self, article_id: i64, category_id: i64) -> RepoResult<i64>;
    /// Returns all categories ordered by id.
    fn list(&self) -> RepoResult<Vec<Category>>;
}

/// SQLite-backed category repository.
pub struct SqliteCategoryRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCategoryRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl CategoryRepository for SqliteCategoryRepository<'_> {
    fn create(&self, draft: &CategoryDraft) -> RepoResult<i64> {
        draft.validate()?;

        self.conn.execute(
            "INSERT INTO categories (name) VALUES (?1);",
            params![draft.name.as_str()],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn link_article(&self, article_id: i64, category_id: i64) -> RepoResult<i64> {
        self.conn.execute(
            "INSERT INTO articles_categories (article_id, category_id) VALUES (?1, ?2);",
            params![article_id, category_id],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn list(&self) -> RepoResult<Vec<Category>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM categories ORDER BY id ASC;")?;
        let mut rows = stmt.query([])?;
        let mut categories = Vec::new();

        while let Some(row) = rows.next()? {
            let id = row.get::<_, Value>(0)?;
            let name = row.get::<_, Value>(1)?;
            categories.push(Category::from_row_values(id, name).map_err(RepoError::from)?);
        }

        Ok(categories)
    }
}
