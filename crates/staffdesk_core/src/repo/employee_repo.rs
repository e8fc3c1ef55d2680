//! Employee repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over the ordered employee collection.
//! - Report semantic errors (`DuplicateId`, `NotFound`) instead of panicking.
//!
//! # Invariants
//! - At most one record per `id`.
//! - Insertion order is preserved across every operation.
//! - An update never changes the stored `id`.

use crate::model::employee::{Employee, EmployeeId, EmployeeValidationError};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for employee store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Validation(EmployeeValidationError),
    DuplicateId(EmployeeId),
    NotFound(EmployeeId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "employee already exists: {id}"),
            Self::NotFound(id) => write!(f, "employee not found: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::DuplicateId(_) => None,
            Self::NotFound(_) => None,
        }
    }
}

impl From<EmployeeValidationError> for RepoError {
    fn from(value: EmployeeValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Repository interface for employee CRUD operations.
pub trait EmployeeRepository {
    fn create_employee(&mut self, employee: Employee) -> RepoResult<()>;
    fn find_index_by_id(&self, id: &str) -> Option<usize>;
    fn get_employee(&self, id: &str) -> Option<&Employee>;
    fn list_employees(&self) -> &[Employee];
    fn update_employee(&mut self, employee: Employee) -> RepoResult<()>;
    fn delete_employee(&mut self, id: &str) -> RepoResult<Employee>;
}

/// Vec-backed repository living for the duration of the process.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeRepository {
    employees: Vec<Employee>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EmployeeRepository for InMemoryEmployeeRepository {
    fn create_employee(&mut self, employee: Employee) -> RepoResult<()> {
        employee.validate()?;

        if self.find_index_by_id(&employee.id).is_some() {
            return Err(RepoError::DuplicateId(employee.id));
        }

        debug!(
            "event=employee_insert module=repo status=ok id={} size={}",
            employee.id,
            self.employees.len() + 1
        );
        self.employees.push(employee);
        Ok(())
    }

    fn find_index_by_id(&self, id: &str) -> Option<usize> {
        self.employees.iter().position(|employee| employee.id == id)
    }

    fn get_employee(&self, id: &str) -> Option<&Employee> {
        self.find_index_by_id(id).map(|index| &self.employees[index])
    }

    fn list_employees(&self) -> &[Employee] {
        &self.employees
    }

    fn update_employee(&mut self, employee: Employee) -> RepoResult<()> {
        employee.validate()?;

        let index = self
            .find_index_by_id(&employee.id)
            .ok_or_else(|| RepoError::NotFound(employee.id.clone()))?;
        self.employees[index] = employee;
        Ok(())
    }

    fn delete_employee(&mut self, id: &str) -> RepoResult<Employee> {
        let index = self
            .find_index_by_id(id)
            .ok_or_else(|| RepoError::NotFound(id.to_string()))?;
        // `Vec::remove` shifts the tail, keeping the relative order intact.
        Ok(self.employees.remove(index))
    }
}
