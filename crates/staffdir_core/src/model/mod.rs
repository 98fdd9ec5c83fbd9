//! Domain model for directory records.
//!
//! # Responsibility
//! - Define the canonical employee record used by repository and service.
//!
//! # Invariants
//! - Every record is identified by a stable integer `EmployeeId`.
//! - Records are read-only once handed to the service layer.

pub mod employee;
