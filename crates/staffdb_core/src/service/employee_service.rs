//! Employee use-case service.
//!
//! # Responsibility
//! - Existence check, salary threshold projection and department listing.
//! - Department-wide salary raise.
//!
//! # Invariants
//! - A raise is not idempotent: each call compounds the factor.

use crate::model::decimal::Decimal;
use crate::model::entities::DepartmentId;
use crate::repo::employee_repo::{DepartmentEmployee, EmployeeRepository};
use crate::repo::RepoResult;
use log::info;

/// Use-case service wrapper for employee operations.
pub struct EmployeeService<E: EmployeeRepository> {
    repo: E,
}

impl<E: EmployeeRepository> EmployeeService<E> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: E) -> Self {
        Self { repo }
    }

    /// Returns whether at least one employee has this first and last name.
    pub fn contains_employee(&self, first_name: &str, last_name: &str) -> RepoResult<bool> {
        Ok(self.repo.count_by_full_name(first_name, last_name)? > 0)
    }

    /// First names of employees paid strictly more than `floor`.
    pub fn first_names_earning_over(&self, floor: Decimal) -> RepoResult<Vec<String>> {
        self.repo.first_names_with_salary_above(floor)
    }

    /// Employees of one department, cheapest first, ties by id.
    pub fn employees_in_department(
        &self,
        department_name: &str,
    ) -> RepoResult<Vec<DepartmentEmployee>> {
        self.repo.list_by_department_name(department_name)
    }

    /// Multiplies salaries in `department_ids` by `factor`.
    ///
    /// Unknown department ids match nothing. Returns the affected row count.
    pub fn raise_salaries(
        &self,
        department_ids: &[DepartmentId],
        factor: Decimal,
    ) -> RepoResult<usize> {
        let affected = self
            .repo
            .scale_salaries_in_departments(department_ids, factor)?;
        info!(
            "event=salary_raise module=service status=ok departments={} factor={} affected={}",
            department_ids.len(),
            factor,
            affected
        );
        Ok(affected)
    }
}
