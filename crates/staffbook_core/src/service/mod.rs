//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate model construction and store calls into the add/list/
//!   delete entry points consumed by the presentation layer.
//! - Keep UI layers decoupled from storage details.

pub mod employee_service;
