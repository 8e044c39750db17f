#![allow(dead_code)]

use rusqlite::{params, Connection};
use staffdb_core::db::open_db_in_memory;
use staffdb_core::Decimal;

/// `(id, first, last, salary, department_id, address_id)`
const EMPLOYEES: &[(i64, &str, &str, &str, i64, Option<i64>)] = &[
    (1, "Guy", "Gilbert", "12500", 1, Some(1)),
    (2, "Kevin", "Brown", "50000.00", 2, Some(2)),
    (3, "Roberto", "Tamburello", "43300", 5, Some(1)),
    (4, "Rob", "Walters", "29800", 5, Some(5)),
    (5, "Thierry", "Hers", "25000", 2, Some(5)),
    (6, "David", "Bradley", "60000", 4, Some(2)),
    (7, "Terri", "Duffy", "63500", 5, Some(1)),
    (8, "Kevin", "Smith", "50000.01", 3, None),
    (9, "Ken", "Sanchez", "125500", 11, Some(5)),
    (10, "Terri", "Lee", "29800", 5, None),
];

pub fn seeded_db() -> Connection {
    let conn = open_db_in_memory().unwrap();
    seed(&conn);
    conn
}

pub fn seed(conn: &Connection) {
    conn.execute_batch(
        "INSERT INTO towns (town_id, name) VALUES
            (1, 'Ruse'), (2, 'Varna'), (3, 'Sofia'), (4, 'Plovdiv');
         INSERT INTO addresses (address_id, address_text, town_id) VALUES
            (1, 'Aleksandrovska 1', 1),
            (2, 'Primorski 12', 2),
            (3, 'Vitosha 1', 3),
            (4, 'Graf Ignatiev 5', 3),
            (5, 'Glavna 7', 4),
            (6, 'Nowhere 0', NULL);
         INSERT INTO departments (department_id, name) VALUES
            (1, 'Engineering'),
            (2, 'Tool Design'),
            (3, 'Sales'),
            (4, 'Marketing'),
            (5, 'Research and Development'),
            (6, 'Quality Assurance'),
            (11, 'Information Services');",
    )
    .unwrap();

    for &(id, first, last, salary, department_id, address_id) in EMPLOYEES {
        insert_employee(conn, id, first, last, salary, department_id, address_id);
    }
}

pub fn insert_employee(
    conn: &Connection,
    id: i64,
    first_name: &str,
    last_name: &str,
    salary: &str,
    department_id: i64,
    address_id: Option<i64>,
) {
    let salary: Decimal = salary.parse().unwrap();
    conn.execute(
        "INSERT INTO employees (
            employee_id, first_name, last_name, salary, department_id, address_id
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
        params![id, first_name, last_name, salary, department_id, address_id],
    )
    .unwrap();
}

pub fn salary_of(conn: &Connection, employee_id: i64) -> Decimal {
    conn.query_row(
        "SELECT salary FROM employees WHERE employee_id = ?1;",
        [employee_id],
        |row| row.get(0),
    )
    .unwrap()
}

pub fn count(conn: &Connection, sql: &str) -> i64 {
    conn.query_row(sql, [], |row| row.get(0)).unwrap()
}

pub fn dec(text: &str) -> Decimal {
    text.parse().unwrap()
}
