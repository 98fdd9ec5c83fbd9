//! Employee domain model.
//!
//! # Responsibility
//! - Define the record shape shared by repository and service layers.
//! - Validate write-path inputs before they reach persistence.
//!
//! # Invariants
//! - `id` is the unique key; the store holds zero or one record per id.
//! - First and last name must be non-blank when a record is persisted.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for an employee record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EmployeeId = i64;

/// Validation failure for employee write paths.
///
/// Lookup paths never validate the key; this error only guards inserts and
/// read-back of persisted rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeValidationError {
    BlankFirstName,
    BlankLastName,
}

impl Display for EmployeeValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankFirstName => write!(f, "first name must not be blank"),
            Self::BlankLastName => write!(f, "last name must not be blank"),
        }
    }
}

impl Error for EmployeeValidationError {}

/// Canonical directory record: identifier plus first/last name pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique integer key owned by the persistence layer.
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
}

impl Employee {
    /// Creates a record with the given key and name pair.
    pub fn new(id: EmployeeId, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Checks write-path invariants.
    ///
    /// # Errors
    /// - Returns an error when either name field is empty or whitespace-only.
    pub fn validate(&self) -> Result<(), EmployeeValidationError> {
        if self.first_name.trim().is_empty() {
            return Err(EmployeeValidationError::BlankFirstName);
        }
        if self.last_name.trim().is_empty() {
            return Err(EmployeeValidationError::BlankLastName);
        }
        Ok(())
    }

    /// Returns `first last` for display purposes.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
