//! Article repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the typed write path for article rows.
//! - Materialize article aggregates (article + linked categories) through
//!   the join/group builder.
//!
//! # Invariants
//! - Mutations validate the draft before touching SQL.
//! - `get` expects exactly one matching aggregate; zero is `NotFound`, more
//!   than one is a contract violation.

use crate::model::article::{Article, ArticleDraft};
use crate::model::category::Category;
use crate::repo::aggregate::{AggregateQuery, Filter, RowGroup};
use crate::repo::{RepoError, RepoResult};
use rusqlite::types::Value;
use rusqlite::{params, Connection};

const ARTICLE_AGGREGATE: AggregateQuery = AggregateQuery {
    base_table: "articles",
    base_columns: &["id", "title", "published"],
    link_table: "articles_categories",
    link_base_key: "article_id",
    link_target_key: "category_id",
    target_table: "categories",
    target_columns: &["id", "name"],
};

/// Repository interface for article aggregates.
pub trait ArticleRepository {
    /// Inserts one article row and returns its generated id.
    fn create(&self, draft: &ArticleDraft) -> RepoResult<i64>;
    /// Replaces the scalar fields of an existing article row.
    fn update(&self, id: i64, draft: &ArticleDraft) -> RepoResult<()>;
    /// Loads exactly one article aggregate by id.
    fn get(&self, id: i64) -> RepoResult<Article>;
    /// Loads all published article aggregates; empty when none match.
    fn published(&self) -> RepoResult<Vec<Article>>;
}

/// SQLite-backed article repository.
pub struct SqliteArticleRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteArticleRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ArticleRepository for SqliteArticleRepository<'_> {
    fn create(&self, draft: &ArticleDraft) -> RepoResult<i64> {
        draft.validate()?;

        self.conn.execute(
            "INSERT INTO articles (title, published) VALUES (?1, ?2);",
            params![draft.title.as_str(), bool_to_int(draft.published)],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn update(&self, id: i64, draft: &ArticleDraft) -> RepoResult<()> {
        draft.validate()?;

        let changed = self.conn.execute(
            "UPDATE articles SET title = ?1, published = ?2 WHERE id = ?3;",
            params![draft.title.as_str(), bool_to_int(draft.published), id],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn get(&self, id: i64) -> RepoResult<Article> {
        let filter = Filter::base_eq("id", Value::Integer(id));
        let mut groups = ARTICLE_AGGREGATE.fetch_grouped(self.conn, &filter)?;

        match groups.len() {
            0 => Err(RepoError::NotFound(id)),
            1 => map_group(groups.remove(0)),
            count => Err(RepoError::TooManyRows { id, count }),
        }
    }

    fn published(&self) -> RepoResult<Vec<Article>> {
        let filter = Filter::base_eq("published", Value::Integer(1));
        let groups = ARTICLE_AGGREGATE.fetch_grouped(self.conn, &filter)?;
        groups.into_iter().map(map_group).collect()
    }
}

fn map_group(group: RowGroup) -> RepoResult<Article> {
    let categories = group
        .target_rows
        .into_iter()
        .map(|row| {
            let mut values = row.into_iter();
            let id = values.next().unwrap_or(Value::Null);
            let name = values.next().unwrap_or(Value::Null);
            Category::from_row_values(id, name).map_err(RepoError::from)
        })
        .collect::<RepoResult<Vec<Category>>>()?;

    let mut values = group.base_values.into_iter();
    let id = values.next().unwrap_or(Value::Null);
    let title = values.next().unwrap_or(Value::Null);
    let published = values.next().unwrap_or(Value::Null);

    Article::from_row_values(id, title, published, categories).map_err(RepoError::from)
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}
