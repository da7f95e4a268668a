use staffbook_core::{
    AddEmployeeRequest, EmployeeService, FileEmployeeStore, ServiceError,
};
use tempfile::TempDir;

fn service_fixture() -> (TempDir, EmployeeService<FileEmployeeStore>) {
    let dir = TempDir::new().unwrap();
    let store = FileEmployeeStore::new(dir.path().join("employees.txt"));
    (dir, EmployeeService::new(store))
}

fn request(id: &str, name: &str, base_salary: &str, role: &str) -> AddEmployeeRequest {
    AddEmployeeRequest {
        id: id.to_string(),
        name: name.to_string(),
        base_salary: base_salary.to_string(),
        role: role.to_string(),
    }
}

#[test]
fn add_list_delete_full_scenario() {
    let (_dir, service) = service_fixture();

    service
        .add_employee(&request("1", "Alice", "50000", "Manager"))
        .unwrap();
    service
        .add_employee(&request("2", "Bob", "50000", "Developer"))
        .unwrap();

    let carol = service
        .add_employee(&request("3", "Carol", "50000", "Manager"))
        .unwrap();
    assert_eq!(carol.salary, 60_000.0);

    let rows = service.list_employees().unwrap();
    let fields: Vec<(&str, &str, &str)> = rows
        .iter()
        .map(|row| (row.id.as_str(), row.name.as_str(), row.salary.as_str()))
        .collect();
    assert_eq!(
        fields,
        vec![
            ("1", "Alice", "60000.0"),
            ("2", "Bob", "55000.0"),
            ("3", "Carol", "60000.0"),
        ]
    );

    assert!(service.delete_employee("2").unwrap());

    let rows = service.list_employees().unwrap();
    let fields: Vec<(&str, &str, &str)> = rows
        .iter()
        .map(|row| (row.id.as_str(), row.name.as_str(), row.salary.as_str()))
        .collect();
    assert_eq!(
        fields,
        vec![("1", "Alice", "60000.0"), ("3", "Carol", "60000.0")]
    );
}

#[test]
fn non_numeric_salary_fails_with_parse_kind_and_no_side_effect() {
    let (_dir, service) = service_fixture();

    let err = service
        .add_employee(&request("1", "Alice", "lots", "Manager"))
        .unwrap_err();
    assert!(matches!(err, ServiceError::InvalidNumber { .. }));
    assert!(service.list_employees().unwrap().is_empty());
}

#[test]
fn negative_salary_fails_with_validation_kind_and_no_side_effect() {
    let (_dir, service) = service_fixture();

    let err = service
        .add_employee(&request("1", "Alice", "-50000", "Manager"))
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
    assert!(service.list_employees().unwrap().is_empty());
}

#[test]
fn salary_text_is_trimmed_before_parsing() {
    let (_dir, service) = service_fixture();

    let employee = service
        .add_employee(&request("1", "Alice", " 40000 ", "Intern"))
        .unwrap();
    assert_eq!(employee.salary, 40_000.0);
}

#[test]
fn unknown_role_is_treated_as_intern() {
    let (_dir, service) = service_fixture();

    let employee = service
        .add_employee(&request("9", "Hana", "40000", "CEO"))
        .unwrap();
    assert_eq!(employee.salary, 40_000.0);

    let rows = service.list_employees().unwrap();
    assert_eq!(rows[0].salary, "40000.0");
}

#[test]
fn delete_of_unknown_id_reports_not_found() {
    let (_dir, service) = service_fixture();
    assert!(!service.delete_employee("404").unwrap());
}
