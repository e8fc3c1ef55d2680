//! Employee record.
//!
//! # Responsibility
//! - Define the canonical employee record and its presence rules.
//! - Provide validated constructors for add paths.
//!
//! # Invariants
//! - `id` and `name` are never blank.
//! - `role` and `department` default to the empty string.
//! - Deserialized records pass the same validation as constructed ones.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// User-chosen identifier, unique within one store.
pub type EmployeeId = String;

/// Presence violations for employee records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeValidationError {
    EmptyId,
    EmptyName,
}

impl Display for EmployeeValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "ID is required"),
            Self::EmptyName => write!(f, "Name is required"),
        }
    }
}

impl Error for EmployeeValidationError {}

/// One employee as held by the record store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EmployeeFields")]
pub struct Employee {
    /// Unique key; immutable once the record exists.
    pub id: EmployeeId,
    pub name: String,
    /// Empty when not provided.
    pub role: String,
    /// Empty when not provided.
    pub department: String,
}

impl Employee {
    /// Creates an employee with empty role and department.
    ///
    /// # Errors
    /// - `EmptyId` when `id` is blank.
    /// - `EmptyName` when `name` is blank.
    pub fn new(
        id: impl Into<EmployeeId>,
        name: impl Into<String>,
    ) -> Result<Self, EmployeeValidationError> {
        let employee = Self {
            id: id.into(),
            name: name.into(),
            role: String::new(),
            department: String::new(),
        };
        employee.validate()?;
        Ok(employee)
    }

    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    #[must_use]
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    /// Re-checks presence invariants.
    ///
    /// Fields are public, so write paths call this before mutating the store.
    pub fn validate(&self) -> Result<(), EmployeeValidationError> {
        if is_blank(&self.id) {
            return Err(EmployeeValidationError::EmptyId);
        }
        if is_blank(&self.name) {
            return Err(EmployeeValidationError::EmptyName);
        }
        Ok(())
    }
}

/// Unvalidated wire shape used only during deserialization.
#[derive(Deserialize)]
struct EmployeeFields {
    id: EmployeeId,
    name: String,
    #[serde(default)]
    role: String,
    #[serde(default)]
    department: String,
}

impl TryFrom<EmployeeFields> for Employee {
    type Error = EmployeeValidationError;

    fn try_from(value: EmployeeFields) -> Result<Self, Self::Error> {
        Ok(Self::new(value.id, value.name)?
            .with_role(value.role)
            .with_department(value.department))
    }
}

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
