//! Core domain logic for Staffbook, a flat-file employee register.
//! This crate is the single source of truth for business invariants;
//! presentation shells (CLI, GUI) stay free of business logic.

pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::employee::{Employee, EmployeeRow, EmployeeValidationError, Role};
pub use service::employee_service::{
    AddEmployeeRequest, EmployeeService, ServiceError, ServiceResult,
};
pub use store::{EmployeeStore, FileEmployeeStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
