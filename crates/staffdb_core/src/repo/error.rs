//! Repository error types.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// A lookup that expected exactly one row and found some other count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupMiss {
    /// Entity kind, e.g. `town`.
    pub entity: &'static str,
    /// The key that was searched for.
    pub key: String,
    /// Number of rows that matched: `0` when missing, `>1` when ambiguous.
    pub matches: usize,
}

impl LookupMiss {
    pub fn is_ambiguous(&self) -> bool {
        self.matches > 1
    }
}

impl Display for LookupMiss {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_ambiguous() {
            write!(
                f,
                "{} lookup `{}` is ambiguous: {} rows match",
                self.entity, self.key, self.matches
            )
        } else {
            write!(f, "{} not found: `{}`", self.entity, self.key)
        }
    }
}

/// Repository error for staff persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    /// Underlying SQLite/bootstrap error, including constraint violations.
    Db(DbError),
    /// Exactly-one lookup found zero or several rows.
    NotFound(LookupMiss),
    /// Required table is missing.
    MissingRequiredTable(&'static str),
    /// Required column is missing from expected table.
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
    /// Persisted data cannot be converted to a valid row model.
    InvalidData(String),
}

impl RepoError {
    /// Returns whether the store rejected the write on a constraint.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, Self::Db(err) if err.is_constraint_violation())
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(miss) => write!(f, "{miss}"),
            Self::MissingRequiredTable(table) => {
                write!(f, "staff repository requires table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => write!(
                f,
                "staff repository requires column `{column}` in table `{table}`"
            ),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::MissingRequiredTable(_) => None,
            Self::MissingRequiredColumn { .. } => None,
            Self::InvalidData(_) => None,
        }
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
