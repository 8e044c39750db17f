//! Address use-case service.
//!
//! # Responsibility
//! - Create an address and move one employee to it.
//! - Rank addresses by how many employees live there.

use crate::model::entities::{Address, Employee};
use crate::repo::address_repo::{AddressOccupancy, AddressRepository};
use crate::repo::employee_repo::EmployeeRepository;
use crate::repo::{LookupMiss, RepoError, RepoResult};
use log::info;

/// Use-case service for address operations.
pub struct AddressService<A: AddressRepository, E: EmployeeRepository> {
    addresses: A,
    employees: E,
}

impl<A: AddressRepository, E: EmployeeRepository> AddressService<A, E> {
    pub fn new(addresses: A, employees: E) -> Self {
        Self {
            addresses,
            employees,
        }
    }

    /// Creates a town-less address with `address_text` and assigns it to the
    /// single employee whose last name is `last_name`.
    ///
    /// # Contract
    /// - The employee is resolved first; a missing or ambiguous last name
    ///   fails with `RepoError::NotFound` before anything is written.
    /// - The insert and the reassignment are two units of work.
    /// - The returned employee is reloaded after the reassignment.
    pub fn relocate_employee(
        &self,
        last_name: &str,
        address_text: &str,
    ) -> RepoResult<(Employee, Address)> {
        let employee_id = self.employees.find_by_last_name(last_name)?.id;
        let address = self.addresses.create_address(address_text, None)?;
        self.employees.assign_address(employee_id, address.id)?;
        let employee = self
            .employees
            .get_employee(employee_id)?
            .ok_or_else(|| {
                RepoError::NotFound(LookupMiss {
                    entity: "employee",
                    key: employee_id.to_string(),
                    matches: 0,
                })
            })?;

        info!(
            "event=employee_relocate module=service status=ok employee_id={} address_id={}",
            employee.id, address.id
        );
        Ok((employee, address))
    }

    /// Addresses with the most residents first, at most `limit` rows.
    pub fn most_populated_addresses(&self, limit: u32) -> RepoResult<Vec<AddressOccupancy>> {
        self.addresses.top_by_employee_count(limit)
    }
}
