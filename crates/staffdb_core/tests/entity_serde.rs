use serde_json::json;
use staffdb_core::{Address, Decimal, Employee};

#[test]
fn address_serializes_with_column_names() {
    let address = Address {
        id: 3,
        text: "Vitosha 1".to_string(),
        town_id: None,
    };

    let value = serde_json::to_value(&address).unwrap();
    assert_eq!(
        value,
        json!({ "id": 3, "address_text": "Vitosha 1", "town_id": null })
    );
}

#[test]
fn employee_salary_serializes_as_exact_decimal_text() {
    let employee = Employee {
        id: 2,
        first_name: "Kevin".to_string(),
        last_name: "Brown".to_string(),
        salary: "60000.5".parse::<Decimal>().unwrap(),
        department_id: 2,
        address_id: Some(2),
    };

    let value = serde_json::to_value(&employee).unwrap();
    assert_eq!(value["salary"], json!("60000.5"));

    let back: Employee = serde_json::from_value(value).unwrap();
    assert_eq!(back, employee);
}
