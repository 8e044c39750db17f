//! Department repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Per-department salary aggregates filtered by a closed range.

use crate::model::decimal::Decimal;
use crate::model::entities::Department;
use crate::repo::{ensure_table_ready, RepoResult};
use rusqlite::{params, Connection, Row};

/// Department with the highest salary paid in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentMaxSalary {
    pub department: Department,
    pub max_salary: Decimal,
}

/// Repository interface for department aggregates.
pub trait DepartmentRepository {
    /// Returns departments whose maximum salary is outside `[low, high]`,
    /// ordered by department id. Departments without employees are skipped.
    fn max_salaries_outside(&self, low: Decimal, high: Decimal)
        -> RepoResult<Vec<DepartmentMaxSalary>>;
}

/// SQLite-backed department repository.
pub struct SqliteDepartmentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDepartmentRepository<'conn> {
    /// Creates repository from a bootstrapped connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table_ready(conn, "departments", &["department_id", "name"])?;
        ensure_table_ready(conn, "employees", &["department_id", "salary"])?;
        Ok(Self { conn })
    }
}

impl DepartmentRepository for SqliteDepartmentRepository<'_> {
    fn max_salaries_outside(
        &self,
        low: Decimal,
        high: Decimal,
    ) -> RepoResult<Vec<DepartmentMaxSalary>> {
        let mut stmt = self.conn.prepare(
            "SELECT
                d.department_id AS department_id,
                d.name AS name,
                MAX(e.salary) AS max_salary
             FROM departments d
             JOIN employees e ON e.department_id = d.department_id
             GROUP BY d.department_id, d.name
             HAVING max_salary NOT BETWEEN ?1 AND ?2
             ORDER BY d.department_id;",
        )?;
        let rows = stmt
            .query_map(params![low, high], parse_max_salary_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

fn parse_max_salary_row(row: &Row<'_>) -> rusqlite::Result<DepartmentMaxSalary> {
    Ok(DepartmentMaxSalary {
        department: Department {
            id: row.get("department_id")?,
            name: row.get("name")?,
        },
        max_salary: row.get("max_salary")?,
    })
}
