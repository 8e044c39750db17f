//! Department use-case service.

use crate::model::decimal::Decimal;
use crate::repo::department_repo::{DepartmentMaxSalary, DepartmentRepository};
use crate::repo::RepoResult;

/// Use-case service for department aggregates.
pub struct DepartmentService<D: DepartmentRepository> {
    repo: D,
}

impl<D: DepartmentRepository> DepartmentService<D> {
    pub fn new(repo: D) -> Self {
        Self { repo }
    }

    /// Departments whose top salary falls outside `[low, high]`.
    pub fn max_salaries_outside(
        &self,
        low: Decimal,
        high: Decimal,
    ) -> RepoResult<Vec<DepartmentMaxSalary>> {
        self.repo.max_salaries_outside(low, high)
    }
}
