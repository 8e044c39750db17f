mod common;

use common::{count, dec, insert_employee, seeded_db};
use staffdb_core::{
    AddressService, DepartmentService, EmployeeRepository, EmployeeService,
    RepoError, SqliteAddressRepository, SqliteDepartmentRepository, SqliteEmployeeRepository,
};

#[test]
fn contains_employee_matches_full_name_ignoring_case() {
    let conn = seeded_db();
    let service = EmployeeService::new(SqliteEmployeeRepository::try_new(&conn).unwrap());

    assert!(service.contains_employee("Guy", "Gilbert").unwrap());
    assert!(service.contains_employee("guy", "GILBERT").unwrap());
    assert!(!service.contains_employee("Guy", "Brown").unwrap());
    assert!(!service.contains_employee("Nobody", "Here").unwrap());
}

#[test]
fn contains_employee_ignores_case_of_non_ascii_names() {
    let conn = seeded_db();
    insert_employee(&conn, 40, "Иван", "Петров", "42000", 3, None);
    let service = EmployeeService::new(SqliteEmployeeRepository::try_new(&conn).unwrap());

    assert!(service.contains_employee("Иван", "Петров").unwrap());
    assert!(service.contains_employee("иван", "петров").unwrap());
    assert!(service.contains_employee("ИВАН", "ПЕТРОВ").unwrap());
    assert!(!service.contains_employee("Иван", "Иванов").unwrap());
}

#[test]
fn first_names_are_strictly_above_floor_and_keep_duplicates() {
    let conn = seeded_db();
    insert_employee(&conn, 30, "David", "Ortiz", "51000", 3, None);
    let service = EmployeeService::new(SqliteEmployeeRepository::try_new(&conn).unwrap());

    let names = service.first_names_earning_over(dec("50000")).unwrap();
    assert_eq!(names, vec!["David", "Terri", "Kevin", "Ken", "David"]);
}

#[test]
fn department_listing_orders_by_salary_then_id() {
    let conn = seeded_db();
    let service = EmployeeService::new(SqliteEmployeeRepository::try_new(&conn).unwrap());

    let listed = service
        .employees_in_department("Research and Development")
        .unwrap();
    let ids = listed
        .iter()
        .map(|row| row.employee.id)
        .collect::<Vec<_>>();
    assert_eq!(ids, vec![4, 10, 3, 7]);
    assert!(listed
        .iter()
        .all(|row| row.department_name == "Research and Development"));
    assert_eq!(listed[0].employee.full_name(), "Rob Walters");
    assert_eq!(listed[3].employee.salary, dec("63500"));

    assert!(service.employees_in_department("Nope").unwrap().is_empty());
}

#[test]
fn relocate_employee_creates_address_and_assigns_it() {
    let conn = seeded_db();
    let service = AddressService::new(
        SqliteAddressRepository::try_new(&conn).unwrap(),
        SqliteEmployeeRepository::try_new(&conn).unwrap(),
    );

    let (employee, address) = service
        .relocate_employee("Gilbert", "Vitoshka 15")
        .unwrap();
    assert_eq!(employee.id, 1);
    assert_eq!(address.text, "Vitoshka 15");
    assert_eq!(address.town_id, None);
    assert_eq!(employee.address_id, Some(address.id));

    let employees = SqliteEmployeeRepository::try_new(&conn).unwrap();
    let stored = employees.get_employee(1).unwrap().unwrap();
    assert_eq!(stored.address_id, Some(address.id));

    assert_eq!(
        count(
            &conn,
            &format!(
                "SELECT COUNT(*) FROM addresses
                 WHERE address_id = {} AND address_text = 'Vitoshka 15' AND town_id IS NULL;",
                address.id
            ),
        ),
        1
    );
}

#[test]
fn relocate_employee_fails_before_writing_when_lookup_misses() {
    let conn = seeded_db();
    insert_employee(&conn, 31, "Janice", "Gilbert", "31000", 3, None);
    let service = AddressService::new(
        SqliteAddressRepository::try_new(&conn).unwrap(),
        SqliteEmployeeRepository::try_new(&conn).unwrap(),
    );

    let missing = service
        .relocate_employee("Nobody", "Vitoshka 15")
        .unwrap_err();
    assert!(matches!(missing, RepoError::NotFound(ref miss) if miss.matches == 0));

    let ambiguous = service
        .relocate_employee("Gilbert", "Vitoshka 15")
        .unwrap_err();
    assert!(matches!(ambiguous, RepoError::NotFound(ref miss) if miss.matches == 2));

    assert_eq!(count(&conn, "SELECT COUNT(*) FROM addresses;"), 6);
}

#[test]
fn most_populated_addresses_rank_by_resident_count() {
    let conn = seeded_db();
    let service = AddressService::new(
        SqliteAddressRepository::try_new(&conn).unwrap(),
        SqliteEmployeeRepository::try_new(&conn).unwrap(),
    );

    let ranked = service.most_populated_addresses(10).unwrap();
    let summary = ranked
        .iter()
        .map(|row| (row.address.id, row.employee_count))
        .collect::<Vec<_>>();
    assert_eq!(
        summary,
        vec![(1, 3), (5, 3), (2, 2), (3, 0), (4, 0), (6, 0)]
    );
    assert_eq!(ranked[0].town_name.as_deref(), Some("Ruse"));
    assert_eq!(ranked[5].town_name, None);

    let top_two = service.most_populated_addresses(2).unwrap();
    assert_eq!(top_two.len(), 2);
}

#[test]
fn max_salaries_outside_range_skip_empty_departments() {
    let conn = seeded_db();
    let service = DepartmentService::new(SqliteDepartmentRepository::try_new(&conn).unwrap());

    let rows = service
        .max_salaries_outside(dec("30000"), dec("70000"))
        .unwrap();
    let summary = rows
        .iter()
        .map(|row| (row.department.name.as_str(), row.max_salary))
        .collect::<Vec<_>>();
    assert_eq!(
        summary,
        vec![
            ("Engineering", dec("12500")),
            ("Information Services", dec("125500")),
        ]
    );
}

#[test]
fn max_salary_range_bounds_are_inclusive() {
    let conn = seeded_db();
    insert_employee(&conn, 32, "Edge", "Case", "70000", 6, None);
    let service = DepartmentService::new(SqliteDepartmentRepository::try_new(&conn).unwrap());

    let rows = service
        .max_salaries_outside(dec("30000"), dec("70000"))
        .unwrap();
    assert!(rows.iter().all(|row| row.department.id != 6));
}
