//! Employee use-case service.
//!
//! # Responsibility
//! - Turn raw form strings into validated records and persist them.
//! - Provide the stable add/list/delete interface for any UI shell.
//!
//! # Invariants
//! - Service APIs never bypass model validation or store contracts.
//! - A failed operation leaves the store untouched.

use crate::model::employee::{Employee, EmployeeRow, EmployeeValidationError, Role};
use crate::store::{EmployeeStore, StoreError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Operation error surfaced to the presentation layer.
///
/// Every variant is terminal to the single operation in progress and is
/// expected to be rendered as a message, never to crash the process.
#[derive(Debug)]
pub enum ServiceError {
    /// Form input failed a model invariant. No side effect occurred.
    Validation(EmployeeValidationError),
    /// A numeric form field did not parse.
    InvalidNumber {
        field: &'static str,
        value: String,
    },
    /// The store failed at the I/O level.
    Store(StoreError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::InvalidNumber { field, value } => {
                write!(f, "invalid {field}: `{value}` is not a number")
            }
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::InvalidNumber { .. } => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<EmployeeValidationError> for ServiceError {
    fn from(value: EmployeeValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        // Validation failures keep their kind even when a store write path
        // re-checked the record.
        match value {
            StoreError::Validation(err) => Self::Validation(err),
            other => Self::Store(other),
        }
    }
}

/// Raw form values for one add-employee submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddEmployeeRequest {
    pub id: String,
    pub name: String,
    /// Unparsed salary field text.
    pub base_salary: String,
    /// Role selector text; unrecognized values resolve to `Intern`.
    pub role: String,
}

/// Use-case service wrapper over an employee store.
pub struct EmployeeService<S: EmployeeStore> {
    store: S,
}

impl<S: EmployeeStore> EmployeeService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Validates and appends one employee record.
    ///
    /// # Contract
    /// - Parses `base_salary` text; non-numeric input fails with
    ///   `InvalidNumber` before any validation runs.
    /// - Resolves the role permissively via `Role::from_input`.
    /// - Returns the constructed record with its adjusted salary.
    pub fn add_employee(&self, request: &AddEmployeeRequest) -> ServiceResult<Employee> {
        let base_salary: f64 = request.base_salary.trim().parse().map_err(|_| {
            warn!(
                "event=employee_add_rejected module=service status=error reason=invalid_number id={}",
                request.id
            );
            ServiceError::InvalidNumber {
                field: "base salary",
                value: request.base_salary.clone(),
            }
        })?;

        let role = Role::from_input(&request.role);
        let employee =
            Employee::from_form(request.id.clone(), request.name.clone(), base_salary, role)?;
        self.store.append(&employee)?;

        info!(
            "event=employee_added module=service status=ok id={} role={}",
            employee.id,
            role.as_str()
        );
        Ok(employee)
    }

    /// Lists every stored record as raw fields, in append order.
    pub fn list_employees(&self) -> ServiceResult<Vec<EmployeeRow>> {
        let rows = self.store.list_all()?;
        info!(
            "event=employees_listed module=service status=ok count={}",
            rows.len()
        );
        Ok(rows)
    }

    /// Deletes every record matching `id` exactly.
    ///
    /// Returns `true` when something was deleted, `false` when no record
    /// matched; both are successful outcomes.
    pub fn delete_employee(&self, id: &str) -> ServiceResult<bool> {
        let deleted = self.store.delete_by_id(id)?;
        info!(
            "event=employee_delete module=service status=ok id={id} deleted={deleted}"
        );
        Ok(deleted)
    }
}
