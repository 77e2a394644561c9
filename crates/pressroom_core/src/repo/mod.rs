//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for articles and
//!   categories.
//! - Isolate SQLite query details from the driver.
//!
//! # Invariants
//! - Repository writes validate the draft before any SQL mutation.
//! - Read paths reject invalid persisted state instead of masking it.
//! - All entity writes go through a typed repository; no raw-statement
//!   side doors.

use crate::db::DbError;
use crate::model::fields::{DraftError, FieldError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod aggregate;
pub mod article_repo;
pub mod category_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for persistence and aggregate query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(DraftError),
    InvalidData(FieldError),
    Db(DbError),
    NotFound(i64),
    /// An exact-id filter produced more than one row group. Should not occur
    /// given primary-key uniqueness; kept as a defensive contract check.
    TooManyRows {
        id: i64,
        count: usize,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::InvalidData(err) => write!(f, "invalid persisted row data: {err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "article not found: {id}"),
            Self::TooManyRows { id, count } => {
                write!(f, "expected at most one row group for id {id}, got {count}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::InvalidData(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::TooManyRows { .. } => None,
        }
    }
}

impl From<DraftError> for RepoError {
    fn from(value: DraftError) -> Self {
        Self::Validation(value)
    }
}

impl From<FieldError> for RepoError {
    fn from(value: FieldError) -> Self {
        Self::InvalidData(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
