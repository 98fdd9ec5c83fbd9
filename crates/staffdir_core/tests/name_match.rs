use staffdir_core::{
    DirectoryService, Employee, EmployeeId, EmployeeRepository, RepoError, RepoResult,
};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// Hand-written test double standing in for the SQLite repository.
///
/// Injected through `DirectoryService::new`, so the service is exercised
/// without any database behind it.
#[derive(Default)]
struct InMemoryEmployeeRepository {
    rows: RefCell<HashMap<EmployeeId, Employee>>,
    reads: Rc<Cell<u32>>,
    fail_reads: bool,
}

impl InMemoryEmployeeRepository {
    fn with_rows(rows: impl IntoIterator<Item = Employee>) -> Self {
        let repo = Self::default();
        repo.rows
            .borrow_mut()
            .extend(rows.into_iter().map(|employee| (employee.id, employee)));
        repo
    }

    fn failing() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }
}

impl EmployeeRepository for InMemoryEmployeeRepository {
    fn find_by_id(&self, id: EmployeeId) -> RepoResult<Option<Employee>> {
        self.reads.set(self.reads.get() + 1);
        if self.fail_reads {
            return Err(RepoError::InvalidData(
                "simulated storage failure".to_string(),
            ));
        }
        Ok(self.rows.borrow().get(&id).cloned())
    }

    fn insert(&self, employee: &Employee) -> RepoResult<EmployeeId> {
        employee.validate()?;
        self.rows
            .borrow_mut()
            .insert(employee.id, employee.clone());
        Ok(employee.id)
    }

    fn list(&self) -> RepoResult<Vec<Employee>> {
        let mut employees: Vec<Employee> = self.rows.borrow().values().cloned().collect();
        employees.sort_by_key(|employee| employee.id);
        Ok(employees)
    }

    fn delete(&self, id: EmployeeId) -> RepoResult<()> {
        match self.rows.borrow_mut().remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepoError::NotFound(id)),
        }
    }
}

#[test]
fn matching_record_returns_true() {
    let repo = InMemoryEmployeeRepository::with_rows([Employee::new(100, "John", "Smith")]);
    let service = DirectoryService::new(repo);

    assert!(service.is_john_smith(100).unwrap());
}

#[test]
fn absent_record_returns_false() {
    let repo = InMemoryEmployeeRepository::default();
    let service = DirectoryService::new(repo);

    assert!(!service.is_john_smith(100).unwrap());
}

#[test]
fn first_name_mismatch_returns_false() {
    let repo = InMemoryEmployeeRepository::with_rows([Employee::new(100, "Jon", "Smith")]);
    let service = DirectoryService::new(repo);

    assert!(!service.is_john_smith(100).unwrap());
}

#[test]
fn last_name_mismatch_returns_false() {
    let repo = InMemoryEmployeeRepository::with_rows([Employee::new(100, "John", "Smyth")]);
    let service = DirectoryService::new(repo);

    assert!(!service.is_john_smith(100).unwrap());
}

#[test]
fn comparison_is_case_sensitive() {
    let repo = InMemoryEmployeeRepository::with_rows([
        Employee::new(100, "john", "smith"),
        Employee::new(101, "JOHN", "SMITH"),
    ]);
    let service = DirectoryService::new(repo);

    assert!(!service.is_john_smith(100).unwrap());
    assert!(!service.is_john_smith(101).unwrap());
}

#[test]
fn lookup_failure_propagates_unchanged() {
    let service = DirectoryService::new(InMemoryEmployeeRepository::failing());

    let err = service.is_john_smith(100).unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}

#[test]
fn predicate_performs_exactly_one_read_per_call() {
    let repo = InMemoryEmployeeRepository::with_rows([Employee::new(100, "John", "Smith")]);
    let reads = Rc::clone(&repo.reads);
    let service = DirectoryService::new(repo);

    service.is_john_smith(100).unwrap();
    service.is_john_smith(999).unwrap();

    // One find per invocation, hit or miss.
    assert_eq!(reads.get(), 2);
}
