//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data access contract the service layer depends on.
//! - Isolate SQLite query details from business orchestration.
//!
//! # Invariants
//! - `find_by_id` returns zero or one record per key; absence is not an error.
//! - Repository writes must enforce `Employee::validate()` before persistence.

pub mod employee_repo;
