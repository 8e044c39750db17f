//! Console line formatting for exercise results.

use staffdb_core::{AddressOccupancy, CascadeDeleteReport, DepartmentEmployee, DepartmentMaxSalary};

const UNKNOWN_TOWN: &str = "Unknown";

pub fn yes_no(found: bool) -> &'static str {
    if found {
        "Yes"
    } else {
        "No"
    }
}

pub fn department_employee_line(row: &DepartmentEmployee) -> String {
    format!(
        "{} {} from {} - ${:.2}",
        row.employee.first_name, row.employee.last_name, row.department_name, row.employee.salary
    )
}

pub fn occupancy_line(row: &AddressOccupancy) -> String {
    format!(
        "{} , {} - {} employees",
        row.address.text,
        row.town_name.as_deref().unwrap_or(UNKNOWN_TOWN),
        row.employee_count
    )
}

pub fn max_salary_line(row: &DepartmentMaxSalary) -> String {
    format!("{} {:.2}", row.department.name, row.max_salary)
}

pub fn cascade_line(report: &CascadeDeleteReport) -> String {
    format!(
        "{} address in {} is deleted",
        report.deleted_addresses, report.town.name
    )
}

#[cfg(test)]
mod tests {
    use super::{cascade_line, department_employee_line, max_salary_line, occupancy_line, yes_no};
    use staffdb_core::{
        Address, AddressOccupancy, CascadeDeleteReport, Department, DepartmentEmployee,
        DepartmentMaxSalary, Employee, Town,
    };

    #[test]
    fn department_employee_line_prints_two_decimal_salary() {
        let row = DepartmentEmployee {
            employee: Employee {
                id: 4,
                first_name: "Rob".to_string(),
                last_name: "Walters".to_string(),
                salary: "29800".parse().unwrap(),
                department_id: 5,
                address_id: None,
            },
            department_name: "Research and Development".to_string(),
        };
        assert_eq!(
            department_employee_line(&row),
            "Rob Walters from Research and Development - $29800.00"
        );
    }

    #[test]
    fn occupancy_line_uses_unknown_for_missing_town() {
        let row = AddressOccupancy {
            address: Address {
                id: 6,
                text: "Nowhere 0".to_string(),
                town_id: None,
            },
            town_name: None,
            employee_count: 0,
        };
        assert_eq!(occupancy_line(&row), "Nowhere 0 , Unknown - 0 employees");
    }

    #[test]
    fn remaining_lines() {
        let max = DepartmentMaxSalary {
            department: Department {
                id: 1,
                name: "Engineering".to_string(),
            },
            max_salary: "12500.5".parse().unwrap(),
        };
        assert_eq!(max_salary_line(&max), "Engineering 12500.50");

        let report = CascadeDeleteReport {
            town: Town {
                id: 3,
                name: "Sofia".to_string(),
            },
            deleted_addresses: 2,
        };
        assert_eq!(cascade_line(&report), "2 address in Sofia is deleted");
        assert_eq!(yes_no(true), "Yes");
        assert_eq!(yes_no(false), "No");
    }
}
