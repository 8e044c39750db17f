//! Core data access for the staff database exercises.
//!
//! Towns, addresses, departments and employees live in SQLite; each menu
//! operation is a service call over explicitly passed repositories.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{AppConfig, ConfigError, ExerciseSettings};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::decimal::{Decimal, DecimalParseError};
pub use model::entities::{
    Address, AddressId, Department, DepartmentId, Employee, EmployeeId, Town, TownId,
};
pub use repo::address_repo::{AddressOccupancy, AddressRepository, SqliteAddressRepository};
pub use repo::department_repo::{
    DepartmentMaxSalary, DepartmentRepository, SqliteDepartmentRepository,
};
pub use repo::employee_repo::{DepartmentEmployee, EmployeeRepository, SqliteEmployeeRepository};
pub use repo::town_repo::{SqliteTownRepository, TownRepository};
pub use repo::{LookupMiss, RepoError, RepoResult};
pub use service::address_service::AddressService;
pub use service::department_service::DepartmentService;
pub use service::employee_service::EmployeeService;
pub use service::town_service::{CascadeDeleteReport, TownService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
