//! Employee domain model.
//!
//! # Responsibility
//! - Define the canonical employee record and its role variants.
//! - Own the salary validation rules enforced before any persistence.
//!
//! # Invariants
//! - A constructed record always has a non-negative, finite salary.
//! - Record fields never contain the store's line delimiters.

pub mod employee;
