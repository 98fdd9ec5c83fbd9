//! Core domain logic for the staffdir employee directory.
//! This crate is the single source of truth for lookup semantics.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::employee::{Employee, EmployeeId, EmployeeValidationError};
pub use repo::employee_repo::{
    EmployeeRepository, RepoError, RepoResult, SqliteEmployeeRepository,
};
pub use service::directory_service::DirectoryService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
