//! Town repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Exact-name town lookup, listing and the short-name uppercase update.
//! - Town row deletion as its own unit of work.
//!
//! # Invariants
//! - `delete_town` never touches `addresses`; a town that is still
//!   referenced is rejected by the foreign key and the transaction rolls back.

use crate::model::entities::{Town, TownId};
use crate::repo::{ensure_table_ready, expect_single, LookupMiss, RepoError, RepoResult};
use rusqlite::{params, Connection, Row, Transaction, TransactionBehavior};

const TOWN_SELECT_SQL: &str = "SELECT town_id, name FROM towns";

/// Repository interface for town operations.
pub trait TownRepository {
    /// Loads the one town whose name equals `name` exactly.
    fn find_town_by_name(&self, name: &str) -> RepoResult<Town>;
    /// Lists all towns ordered by id.
    fn list_towns(&self) -> RepoResult<Vec<Town>>;
    /// Uppercases every town name whose length in characters is at most
    /// `max_len` and returns the number of rows touched. Non-ASCII letters
    /// are uppercased too.
    fn uppercase_short_names(&self, max_len: u32) -> RepoResult<usize>;
    /// Deletes one town row in its own transaction.
    fn delete_town(&self, id: TownId) -> RepoResult<()>;
}

/// SQLite-backed town repository.
pub struct SqliteTownRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTownRepository<'conn> {
    /// Creates repository from a bootstrapped connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table_ready(conn, "towns", &["town_id", "name"])?;
        Ok(Self { conn })
    }
}

impl TownRepository for SqliteTownRepository<'_> {
    fn find_town_by_name(&self, name: &str) -> RepoResult<Town> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TOWN_SELECT_SQL} WHERE name = ?1 ORDER BY town_id;"))?;
        let towns = stmt
            .query_map([name], parse_town_row)?
            .collect::<Result<Vec<_>, _>>()?;
        expect_single(towns, "town", name)
    }

    fn list_towns(&self) -> RepoResult<Vec<Town>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TOWN_SELECT_SQL} ORDER BY town_id;"))?;
        let towns = stmt
            .query_map([], parse_town_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(towns)
    }

    fn uppercase_short_names(&self, max_len: u32) -> RepoResult<usize> {
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        let changed = tx.execute(
            "UPDATE towns SET name = unicode_upper(name) WHERE length(name) <= ?1;",
            params![max_len],
        )?;
        tx.commit()?;
        Ok(changed)
    }

    fn delete_town(&self, id: TownId) -> RepoResult<()> {
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        let changed = tx.execute("DELETE FROM towns WHERE town_id = ?1;", [id])?;
        if changed == 0 {
            return Err(RepoError::NotFound(LookupMiss {
                entity: "town",
                key: id.to_string(),
                matches: 0,
            }));
        }
        tx.commit()?;
        Ok(())
    }
}

fn parse_town_row(row: &Row<'_>) -> rusqlite::Result<Town> {
    Ok(Town {
        id: row.get("town_id")?,
        name: row.get("name")?,
    })
}
