//! Store layer contracts and flat-file implementation.
//!
//! # Responsibility
//! - Define the persistence contract consumed by the service layer.
//! - Keep the line-format details inside the persistence boundary.
//!
//! # Invariants
//! - Write paths must pass `Employee::validate()` before touching disk.
//! - Read paths surface malformed persisted lines instead of masking them.

use crate::model::employee::{Employee, EmployeeRow, EmployeeValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod file_store;

pub use file_store::FileEmployeeStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence error for the employee store.
#[derive(Debug)]
pub enum StoreError {
    Validation(EmployeeValidationError),
    Io {
        op: &'static str,
        source: std::io::Error,
    },
    /// A persisted line did not split into exactly three fields.
    MalformedLine {
        line_number: usize,
        field_count: usize,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Io { op, source } => write!(f, "store {op} failed: {source}"),
            Self::MalformedLine {
                line_number,
                field_count,
            } => write!(
                f,
                "malformed record on line {line_number}: expected 3 fields, found {field_count}"
            ),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Io { source, .. } => Some(source),
            Self::MalformedLine { .. } => None,
        }
    }
}

impl From<EmployeeValidationError> for StoreError {
    fn from(value: EmployeeValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Persistence contract for employee records.
///
/// Implementations must keep append order stable: `list_all` returns
/// records in the order they were appended, and `delete_by_id` preserves
/// the relative order of the surviving records.
pub trait EmployeeStore {
    /// Appends one record to the store.
    fn append(&self, employee: &Employee) -> StoreResult<()>;

    /// Reads every record as raw fields, in append order.
    ///
    /// A fresh call re-reads from the start, so two calls without an
    /// intervening write return identical sequences.
    fn list_all(&self) -> StoreResult<Vec<EmployeeRow>>;

    /// Removes every record whose id field equals `id` exactly.
    ///
    /// Returns `true` when at least one record was removed.
    fn delete_by_id(&self, id: &str) -> StoreResult<bool>;
}
