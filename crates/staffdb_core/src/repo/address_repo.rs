//! Address repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Create addresses, list them per town and delete them in batches.
//! - Rank addresses by resident employee count.
//!
//! # Invariants
//! - `delete_addresses` removes the whole batch in one transaction or
//!   nothing at all.
//! - Employees referencing a deleted address are not reassigned here; the
//!   foreign key rejects such a batch.

use crate::model::entities::{Address, AddressId, TownId};
use crate::repo::{ensure_table_ready, RepoError, RepoResult};
use rusqlite::{params, Connection, Row, Transaction, TransactionBehavior};

const ADDRESS_SELECT_SQL: &str = "SELECT address_id, address_text, town_id FROM addresses";

/// Address row joined with its town name and resident count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressOccupancy {
    pub address: Address,
    /// `None` when the address has no town.
    pub town_name: Option<String>,
    pub employee_count: u32,
}

/// Repository interface for address operations.
pub trait AddressRepository {
    /// Inserts one address in its own transaction and returns the stored row.
    fn create_address(&self, text: &str, town_id: Option<TownId>) -> RepoResult<Address>;
    /// Lists addresses located in `town_id`, ordered by id.
    fn list_addresses_by_town(&self, town_id: TownId) -> RepoResult<Vec<Address>>;
    /// Deletes all `ids` atomically and returns the number of removed rows.
    fn delete_addresses(&self, ids: &[AddressId]) -> RepoResult<usize>;
    /// Returns at most `limit` addresses by resident count descending, then
    /// id ascending.
    fn top_by_employee_count(&self, limit: u32) -> RepoResult<Vec<AddressOccupancy>>;
}

/// SQLite-backed address repository.
pub struct SqliteAddressRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAddressRepository<'conn> {
    /// Creates repository from a bootstrapped connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table_ready(conn, "addresses", &["address_id", "address_text", "town_id"])?;
        Ok(Self { conn })
    }
}

impl AddressRepository for SqliteAddressRepository<'_> {
    fn create_address(&self, text: &str, town_id: Option<TownId>) -> RepoResult<Address> {
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        tx.execute(
            "INSERT INTO addresses (address_text, town_id) VALUES (?1, ?2);",
            params![text, town_id],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        Ok(Address {
            id,
            text: text.to_string(),
            town_id,
        })
    }

    fn list_addresses_by_town(&self, town_id: TownId) -> RepoResult<Vec<Address>> {
        let mut stmt = self.conn.prepare(&format!(
            "{ADDRESS_SELECT_SQL} WHERE town_id = ?1 ORDER BY address_id;"
        ))?;
        let addresses = stmt
            .query_map([town_id], parse_address_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(addresses)
    }

    fn delete_addresses(&self, ids: &[AddressId]) -> RepoResult<usize> {
        if ids.is_empty() {
            return Ok(0);
        }

        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        let mut deleted = 0;
        {
            let mut stmt = tx.prepare("DELETE FROM addresses WHERE address_id = ?1;")?;
            for id in ids {
                deleted += stmt.execute([id])?;
            }
        }
        tx.commit()?;

        Ok(deleted)
    }

    fn top_by_employee_count(&self, limit: u32) -> RepoResult<Vec<AddressOccupancy>> {
        let mut stmt = self.conn.prepare(
            "SELECT
                a.address_id AS address_id,
                a.address_text AS address_text,
                a.town_id AS town_id,
                t.name AS town_name,
                COUNT(e.employee_id) AS employee_count
             FROM addresses a
             LEFT JOIN towns t ON t.town_id = a.town_id
             LEFT JOIN employees e ON e.address_id = a.address_id
             GROUP BY a.address_id, a.address_text, a.town_id, t.name
             ORDER BY employee_count DESC, a.address_id ASC
             LIMIT ?1;",
        )?;
        let mut rows = stmt.query([limit])?;
        let mut ranked = Vec::new();

        while let Some(row) = rows.next()? {
            let count: i64 = row.get("employee_count")?;
            let employee_count = u32::try_from(count).map_err(|_| {
                RepoError::InvalidData(format!("invalid employee count `{count}`"))
            })?;
            ranked.push(AddressOccupancy {
                address: parse_address_row(row)?,
                town_name: row.get("town_name")?,
                employee_count,
            });
        }

        Ok(ranked)
    }
}

fn parse_address_row(row: &Row<'_>) -> rusqlite::Result<Address> {
    Ok(Address {
        id: row.get("address_id")?,
        text: row.get("address_text")?,
        town_id: row.get("town_id")?,
    })
}
