//! Employee repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide keyed lookup plus basic CRUD over `employees` storage.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `id` is a unique key: `find_by_id` yields zero or one record.
//! - Write paths must call `Employee::validate()` before SQL mutations.
//! - Read paths must reject invalid persisted state instead of masking it.

use crate::db::DbError;
use crate::model::employee::{Employee, EmployeeId, EmployeeValidationError};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const EMPLOYEE_SELECT_SQL: &str = "SELECT
    id,
    first_name,
    last_name
FROM employees";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for employee persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(EmployeeValidationError),
    Db(DbError),
    NotFound(EmployeeId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "employee not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted employee data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<EmployeeValidationError> for RepoError {
    fn from(value: EmployeeValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface the directory service is injected with.
///
/// The lookup contract: for a given id the store returns either zero or one
/// record. `Ok(None)` means "no record with this identifier" and is a valid,
/// non-error outcome. The lookup performs no key validation of its own.
pub trait EmployeeRepository {
    /// Fetches at most one record by its unique key. Read-only.
    fn find_by_id(&self, id: EmployeeId) -> RepoResult<Option<Employee>>;
    /// Persists one record and returns its key.
    fn insert(&self, employee: &Employee) -> RepoResult<EmployeeId>;
    /// Lists all records ordered by id.
    fn list(&self) -> RepoResult<Vec<Employee>>;
    /// Removes one record by key.
    fn delete(&self, id: EmployeeId) -> RepoResult<()>;
}

/// SQLite-backed employee repository.
pub struct SqliteEmployeeRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEmployeeRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl EmployeeRepository for SqliteEmployeeRepository<'_> {
    fn find_by_id(&self, id: EmployeeId) -> RepoResult<Option<Employee>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{EMPLOYEE_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_employee_row(row)?));
        }

        Ok(None)
    }

    fn insert(&self, employee: &Employee) -> RepoResult<EmployeeId> {
        employee.validate()?;

        self.conn.execute(
            "INSERT INTO employees (id, first_name, last_name) VALUES (?1, ?2, ?3);",
            params![
                employee.id,
                employee.first_name.as_str(),
                employee.last_name.as_str(),
            ],
        )?;

        Ok(employee.id)
    }

    fn list(&self) -> RepoResult<Vec<Employee>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{EMPLOYEE_SELECT_SQL} ORDER BY id ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut employees = Vec::new();
        while let Some(row) = rows.next()? {
            employees.push(parse_employee_row(row)?);
        }

        Ok(employees)
    }

    fn delete(&self, id: EmployeeId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM employees WHERE id = ?1;", params![id])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

fn parse_employee_row(row: &Row<'_>) -> RepoResult<Employee> {
    let employee = Employee {
        id: row.get("id")?,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
    };
    employee
        .validate()
        .map_err(|err| RepoError::InvalidData(format!("{err} (employees.id={})", employee.id)))?;
    Ok(employee)
}
