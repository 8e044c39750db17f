//! Town use-case service.
//!
//! # Responsibility
//! - Short-name uppercase bulk update.
//! - Two-phase cascade delete: the town's addresses, then the town.
//!
//! # Invariants
//! - The address batch commits before the town delete starts; a failed
//!   batch never reaches the town delete.
//! - Employees living at the deleted addresses are not reassigned. When any
//!   exist, the store rejects the batch and nothing is deleted.

use crate::model::entities::Town;
use crate::repo::address_repo::AddressRepository;
use crate::repo::town_repo::TownRepository;
use crate::repo::RepoResult;
use log::{error, info};

/// Outcome of a cascade town delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadeDeleteReport {
    /// The removed town row.
    pub town: Town,
    /// Number of address rows removed before the town.
    pub deleted_addresses: usize,
}

/// Use-case service for town operations.
pub struct TownService<T: TownRepository, A: AddressRepository> {
    towns: T,
    addresses: A,
}

impl<T: TownRepository, A: AddressRepository> TownService<T, A> {
    /// Creates a service over the provided repositories.
    pub fn new(towns: T, addresses: A) -> Self {
        Self { towns, addresses }
    }

    /// Uppercases town names not longer than `max_len` characters.
    ///
    /// Returns the number of rows touched, including names that were already
    /// uppercase.
    pub fn uppercase_short_towns(&self, max_len: u32) -> RepoResult<usize> {
        let changed = self.towns.uppercase_short_names(max_len)?;
        info!(
            "event=towns_uppercase module=service status=ok max_len={} affected={}",
            max_len, changed
        );
        Ok(changed)
    }

    /// Deletes the town named exactly `town_name` and every address in it.
    ///
    /// # Contract
    /// - Zero or several matching towns: `RepoError::NotFound`, no writes.
    /// - Addresses are deleted in one unit of work, the town in a second.
    /// - Returns the town and the number of deleted addresses.
    pub fn remove_town_cascade(&self, town_name: &str) -> RepoResult<CascadeDeleteReport> {
        let town = self.towns.find_town_by_name(town_name)?;
        let address_ids = self
            .addresses
            .list_addresses_by_town(town.id)?
            .into_iter()
            .map(|address| address.id)
            .collect::<Vec<_>>();

        let deleted_addresses = match self.addresses.delete_addresses(&address_ids) {
            Ok(deleted) => deleted,
            Err(err) => {
                error!(
                    "event=town_cascade_delete module=service status=error phase=addresses town_id={} candidates={} error={}",
                    town.id,
                    address_ids.len(),
                    err
                );
                return Err(err);
            }
        };

        if let Err(err) = self.towns.delete_town(town.id) {
            error!(
                "event=town_cascade_delete module=service status=error phase=town town_id={} deleted_addresses={} error={}",
                town.id, deleted_addresses, err
            );
            return Err(err);
        }

        info!(
            "event=town_cascade_delete module=service status=ok town_id={} deleted_addresses={}",
            town.id, deleted_addresses
        );
        Ok(CascadeDeleteReport {
            town,
            deleted_addresses,
        })
    }

    /// Lists all towns ordered by id.
    pub fn list_towns(&self) -> RepoResult<Vec<Town>> {
        self.towns.list_towns()
    }
}
