//! Employee record model.
//!
//! # Responsibility
//! - Define the employee record constructed from raw form input.
//! - Apply the fixed role-based salary adjustment exactly once.
//!
//! # Invariants
//! - `salary` is derived at construction and never mutated afterwards.
//! - `salary >= 0` for every record that passes validation.
//! - `id` and `name` contain no comma or line break, so the serialized
//!   line always splits back into exactly three fields.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Employee role selected on the entry form.
///
/// Each role carries a fixed additive bonus on top of the base salary.
/// The role itself is not persisted; only the adjusted salary is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Manager,
    Developer,
    Intern,
}

impl Role {
    /// Resolves a raw role string from the presentation layer.
    ///
    /// Unrecognized values fall back to `Intern` (adjustment 0). This is a
    /// permissive default, not an error.
    pub fn from_input(value: &str) -> Self {
        match value {
            "Manager" => Self::Manager,
            "Developer" => Self::Developer,
            _ => Self::Intern,
        }
    }

    /// Fixed bonus added to the base salary for this role.
    pub fn salary_adjustment(self) -> f64 {
        match self {
            Self::Manager => 10_000.0,
            Self::Developer => 5_000.0,
            Self::Intern => 0.0,
        }
    }

    /// Display name matching the form's role selector entries.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Manager => "Manager",
            Self::Developer => "Developer",
            Self::Intern => "Intern",
        }
    }
}

/// Validation failure for raw form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeValidationError {
    /// Base salary below zero.
    NegativeSalary,
    /// Base salary is NaN or infinite.
    NonFiniteSalary,
    /// A text field contains a comma or line break, which would corrupt
    /// the unescaped line format on disk.
    FieldContainsDelimiter { field: &'static str },
}

impl Display for EmployeeValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeSalary => write!(f, "salary cannot be negative"),
            Self::NonFiniteSalary => write!(f, "salary must be a finite number"),
            Self::FieldContainsDelimiter { field } => {
                write!(f, "{field} must not contain a comma or line break")
            }
        }
    }
}

impl Error for EmployeeValidationError {}

/// One employee record with its role-adjusted salary.
///
/// Records are transient: they exist in memory between form submission and
/// the append to the store. Listing re-reads raw fields from disk instead
/// of rebuilding typed records, because the role is not persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Externally supplied opaque key. Uniqueness is not enforced.
    pub id: String,
    /// Free-text display name.
    pub name: String,
    /// Base salary plus role adjustment, fixed at construction.
    pub salary: f64,
}

impl Employee {
    /// Builds a record from raw form values.
    ///
    /// # Errors
    /// - `NegativeSalary` when `base_salary < 0`; no record is created.
    /// - `NonFiniteSalary` when `base_salary` is NaN or infinite.
    /// - `FieldContainsDelimiter` when `id` or `name` would break the
    ///   line format.
    pub fn from_form(
        id: impl Into<String>,
        name: impl Into<String>,
        base_salary: f64,
        role: Role,
    ) -> Result<Self, EmployeeValidationError> {
        if !base_salary.is_finite() {
            return Err(EmployeeValidationError::NonFiniteSalary);
        }
        if base_salary < 0.0 {
            return Err(EmployeeValidationError::NegativeSalary);
        }

        let employee = Self {
            id: id.into(),
            name: name.into(),
            salary: base_salary + role.salary_adjustment(),
        };
        employee.validate()?;
        Ok(employee)
    }

    /// Re-checks the record invariants.
    ///
    /// Fields are public, so write paths call this again before
    /// persisting instead of trusting the construction path alone.
    pub fn validate(&self) -> Result<(), EmployeeValidationError> {
        if !self.salary.is_finite() {
            return Err(EmployeeValidationError::NonFiniteSalary);
        }
        if self.salary < 0.0 {
            return Err(EmployeeValidationError::NegativeSalary);
        }
        reject_delimiters("id", &self.id)?;
        reject_delimiters("name", &self.name)?;
        Ok(())
    }

    /// Serialized line form: `id,name,salary`.
    pub fn to_line(&self) -> String {
        format!("{},{},{}", self.id, self.name, format_salary(self.salary))
    }
}

/// Raw field tuple read back from one store line.
///
/// The salary stays in its on-disk text form; the store never re-parses
/// it into a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRow {
    pub id: String,
    pub name: String,
    pub salary: String,
}

impl EmployeeRow {
    /// Human-readable report line for the view panel.
    pub fn report_line(&self) -> String {
        format!("ID: {}, Name: {}, Salary: {}", self.id, self.name, self.salary)
    }
}

fn reject_delimiters(field: &'static str, value: &str) -> Result<(), EmployeeValidationError> {
    if value.contains([',', '\n', '\r']) {
        return Err(EmployeeValidationError::FieldContainsDelimiter { field });
    }
    Ok(())
}

/// Renders a salary the way the store expects it: integral values keep a
/// trailing `.0` (`60000.0`), fractional values use the shortest form.
fn format_salary(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
