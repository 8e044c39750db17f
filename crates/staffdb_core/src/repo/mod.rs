//! Repository layer abstractions and SQLite implementations.
//!
//! # Responsibility
//! - Define per-table data access contracts used by the services.
//! - Isolate SQL text and row mapping from the exercise orchestration.
//!
//! # Invariants
//! - Every write runs inside its own `IMMEDIATE` transaction and either
//!   commits fully or rolls back.
//! - Lookups that require one row return `RepoError::NotFound` on zero or
//!   several matches; nothing silently picks the first row.

use rusqlite::Connection;

pub mod address_repo;
pub mod department_repo;
pub mod employee_repo;
pub mod error;
pub mod town_repo;

pub use error::{LookupMiss, RepoError, RepoResult};

/// Checks that `table` exists and carries every column in `columns`.
///
/// Used by repository constructors so a foreign pre-populated database with a
/// different layout fails fast instead of at the first query.
pub(crate) fn ensure_table_ready(
    conn: &Connection,
    table: &'static str,
    columns: &[&'static str],
) -> RepoResult<()> {
    if !table_exists(conn, table)? {
        return Err(RepoError::MissingRequiredTable(table));
    }

    for &column in columns {
        if !table_has_column(conn, table, column)? {
            return Err(RepoError::MissingRequiredColumn { table, column });
        }
    }

    Ok(())
}

/// Reduces a lookup result set to exactly one row.
pub(crate) fn expect_single<T>(
    mut rows: Vec<T>,
    entity: &'static str,
    key: &str,
) -> RepoResult<T> {
    if rows.len() == 1 {
        if let Some(row) = rows.pop() {
            return Ok(row);
        }
    }

    Err(RepoError::NotFound(LookupMiss {
        entity,
        key: key.to_string(),
        matches: rows.len(),
    }))
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
