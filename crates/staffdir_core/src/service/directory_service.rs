//! Directory use-case service.
//!
//! # Responsibility
//! - Answer the name-match predicate over the injected repository.
//! - Provide a register API that inserts and reads back one record.
//!
//! # Invariants
//! - `is_john_smith` performs exactly one repository read per call.
//! - "Not found" is a `false` result, never an error.
//! - Repository failures propagate unchanged; the service wraps nothing.

use crate::model::employee::{Employee, EmployeeId};
use crate::repo::employee_repo::{EmployeeRepository, RepoError, RepoResult};

const MATCH_FIRST_NAME: &str = "John";
const MATCH_LAST_NAME: &str = "Smith";

/// Directory service facade over repository implementations.
///
/// The repository is supplied through the constructor, so tests can inject an
/// in-memory fake in place of the SQLite implementation.
pub struct DirectoryService<R: EmployeeRepository> {
    repo: R,
}

impl<R: EmployeeRepository> DirectoryService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Determines whether the given id belongs to an employee whose full
    /// name is exactly `John Smith`.
    ///
    /// Comparison is case-sensitive on both fields. An absent record yields
    /// `false`, indistinguishable from a present record with a different
    /// name.
    pub fn is_john_smith(&self, id: EmployeeId) -> RepoResult<bool> {
        let Some(employee) = self.repo.find_by_id(id)? else {
            return Ok(false);
        };

        Ok(employee.first_name == MATCH_FIRST_NAME && employee.last_name == MATCH_LAST_NAME)
    }

    /// Persists one record and returns the stored row.
    pub fn register_employee(&self, employee: &Employee) -> RepoResult<Employee> {
        let id = self.repo.insert(employee)?;
        self.repo.find_by_id(id)?.ok_or_else(|| {
            RepoError::InvalidData(format!("registered employee {id} missing in read-back"))
        })
    }

    /// Gets one record by id, passing the optional result through as-is.
    pub fn get_employee(&self, id: EmployeeId) -> RepoResult<Option<Employee>> {
        self.repo.find_by_id(id)
    }
}

// Kept non-public on purpose: the point is that private logic stays
// verifiable from the same module's tests without any reflection mechanism.
#[allow(dead_code)]
fn add_secretly(a: i64, b: i64) -> i64 {
    a + b
}
