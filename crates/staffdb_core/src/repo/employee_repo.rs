//! Employee repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Name and salary filtered reads over `employees`.
//! - Address reassignment and the department-wide salary scaling update.
//!
//! # Invariants
//! - Salary arithmetic stays in fixed-point ten-thousandths inside SQLite;
//!   no value passes through floating point.
//! - Department listings are ordered by `salary ASC, employee_id ASC`.

use crate::model::decimal::{Decimal, UNITS_PER_ONE};
use crate::model::entities::{AddressId, DepartmentId, Employee, EmployeeId};
use crate::repo::{ensure_table_ready, expect_single, LookupMiss, RepoError, RepoResult};
use rusqlite::types::Value;
use rusqlite::{
    params, params_from_iter, Connection, OptionalExtension, Row, Transaction,
    TransactionBehavior,
};

const EMPLOYEE_SELECT_SQL: &str = "SELECT
    e.employee_id AS employee_id,
    e.first_name AS first_name,
    e.last_name AS last_name,
    e.salary AS salary,
    e.department_id AS department_id,
    e.address_id AS address_id
FROM employees e";

/// Employee row joined with its department name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentEmployee {
    pub employee: Employee,
    pub department_name: String,
}

/// Repository interface for employee operations.
pub trait EmployeeRepository {
    /// Counts employees by first and last name, ignoring letter case
    /// (Unicode-aware).
    fn count_by_full_name(&self, first_name: &str, last_name: &str) -> RepoResult<u64>;
    /// First names of employees earning strictly more than `floor`, by id.
    fn first_names_with_salary_above(&self, floor: Decimal) -> RepoResult<Vec<String>>;
    /// Employees of the department named `department_name`.
    fn list_by_department_name(&self, department_name: &str)
        -> RepoResult<Vec<DepartmentEmployee>>;
    /// Loads the one employee whose last name equals `last_name` exactly.
    fn find_by_last_name(&self, last_name: &str) -> RepoResult<Employee>;
    /// Loads one employee by id.
    fn get_employee(&self, id: EmployeeId) -> RepoResult<Option<Employee>>;
    /// Points one employee at `address_id` in its own transaction.
    fn assign_address(&self, employee_id: EmployeeId, address_id: AddressId) -> RepoResult<()>;
    /// Multiplies the salary of every employee in `department_ids` by
    /// `factor` in one transaction and returns the affected row count.
    fn scale_salaries_in_departments(
        &self,
        department_ids: &[DepartmentId],
        factor: Decimal,
    ) -> RepoResult<usize>;
}

/// SQLite-backed employee repository.
pub struct SqliteEmployeeRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEmployeeRepository<'conn> {
    /// Creates repository from a bootstrapped connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table_ready(
            conn,
            "employees",
            &[
                "employee_id",
                "first_name",
                "last_name",
                "salary",
                "department_id",
                "address_id",
            ],
        )?;
        ensure_table_ready(conn, "departments", &["department_id", "name"])?;
        Ok(Self { conn })
    }
}

impl EmployeeRepository for SqliteEmployeeRepository<'_> {
    fn count_by_full_name(&self, first_name: &str, last_name: &str) -> RepoResult<u64> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*)
             FROM employees
             WHERE unicode_lower(first_name) = unicode_lower(?1)
               AND unicode_lower(last_name) = unicode_lower(?2);",
            params![first_name, last_name],
            |row| row.get(0),
        )?;
        u64::try_from(count)
            .map_err(|_| RepoError::InvalidData(format!("invalid employee count `{count}`")))
    }

    fn first_names_with_salary_above(&self, floor: Decimal) -> RepoResult<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT first_name
             FROM employees
             WHERE salary > ?1
             ORDER BY employee_id;",
        )?;
        let names = stmt
            .query_map([floor], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(names)
    }

    fn list_by_department_name(
        &self,
        department_name: &str,
    ) -> RepoResult<Vec<DepartmentEmployee>> {
        let mut stmt = self.conn.prepare(&format!(
            "{EMPLOYEE_SELECT_SQL}
             JOIN departments d ON d.department_id = e.department_id
             WHERE d.name = ?1
             ORDER BY e.salary ASC, e.employee_id ASC;"
        ))?;
        let mut rows = stmt.query([department_name])?;
        let mut employees = Vec::new();

        while let Some(row) = rows.next()? {
            employees.push(DepartmentEmployee {
                employee: parse_employee_row(row)?,
                department_name: department_name.to_string(),
            });
        }

        Ok(employees)
    }

    fn find_by_last_name(&self, last_name: &str) -> RepoResult<Employee> {
        let mut stmt = self.conn.prepare(&format!(
            "{EMPLOYEE_SELECT_SQL} WHERE e.last_name = ?1 ORDER BY e.employee_id;"
        ))?;
        let employees = stmt
            .query_map([last_name], parse_employee_row)?
            .collect::<Result<Vec<_>, _>>()?;
        expect_single(employees, "employee", last_name)
    }

    fn get_employee(&self, id: EmployeeId) -> RepoResult<Option<Employee>> {
        let employee = self
            .conn
            .query_row(
                &format!("{EMPLOYEE_SELECT_SQL} WHERE e.employee_id = ?1;"),
                [id],
                parse_employee_row,
            )
            .optional()?;
        Ok(employee)
    }

    fn assign_address(&self, employee_id: EmployeeId, address_id: AddressId) -> RepoResult<()> {
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        let changed = tx.execute(
            "UPDATE employees SET address_id = ?1 WHERE employee_id = ?2;",
            params![address_id, employee_id],
        )?;
        if changed == 0 {
            return Err(RepoError::NotFound(LookupMiss {
                entity: "employee",
                key: employee_id.to_string(),
                matches: 0,
            }));
        }
        tx.commit()?;
        Ok(())
    }

    fn scale_salaries_in_departments(
        &self,
        department_ids: &[DepartmentId],
        factor: Decimal,
    ) -> RepoResult<usize> {
        if department_ids.is_empty() {
            return Ok(0);
        }

        // Integer division truncates toward zero, so adding a signed half unit
        // first rounds half away from zero, matching `Decimal::checked_mul`.
        let placeholders = (0..department_ids.len())
            .map(|index| format!("?{}", index + 4))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "UPDATE employees
             SET salary = (
                salary * ?1 + CASE WHEN salary * ?1 < 0 THEN -?2 ELSE ?2 END
             ) / ?3
             WHERE department_id IN ({placeholders});"
        );

        let mut bind_values = vec![
            Value::Integer(factor.units()),
            Value::Integer(UNITS_PER_ONE / 2),
            Value::Integer(UNITS_PER_ONE),
        ];
        bind_values.extend(department_ids.iter().map(|id| Value::Integer(*id)));

        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        let changed = tx.execute(&sql, params_from_iter(bind_values))?;
        tx.commit()?;

        Ok(changed)
    }
}

fn parse_employee_row(row: &Row<'_>) -> rusqlite::Result<Employee> {
    Ok(Employee {
        id: row.get("employee_id")?,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        salary: row.get("salary")?,
        department_id: row.get("department_id")?,
        address_id: row.get("address_id")?,
    })
}
