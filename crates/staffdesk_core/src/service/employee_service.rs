//! Employee use-case service.
//!
//! # Responsibility
//! - Provide add/list/search/update/delete entry points for the menu loop.
//! - Apply partial updates through an explicit update struct.
//!
//! # Invariants
//! - Service APIs never bypass repository validation.
//! - Blank update fields keep the current value; `id` is never rewritten.
//! - A declined delete is an outcome, not an error.

use crate::model::employee::{is_blank, Employee, EmployeeId};
use crate::repo::employee_repo::{EmployeeRepository, RepoError, RepoResult};
use crate::search::filter::{search_employees, SearchQuery};
use log::{debug, info};

/// Request model for the add action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewEmployee {
    pub id: EmployeeId,
    pub name: String,
    /// Stored as the empty string when `None`.
    pub role: Option<String>,
    /// Stored as the empty string when `None`.
    pub department: Option<String>,
}

impl NewEmployee {
    pub fn new(id: impl Into<EmployeeId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: None,
            department: None,
        }
    }

    #[must_use]
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    #[must_use]
    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }
}

/// Partial update for an existing employee.
///
/// A field is applied only when it is `Some` and not blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub role: Option<String>,
    pub department: Option<String>,
}

impl EmployeeUpdate {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    #[must_use]
    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    /// Builds the updated record from `current`.
    pub fn apply_to(&self, current: &Employee) -> Employee {
        Employee {
            id: current.id.clone(),
            name: pick(self.name.as_deref(), &current.name),
            role: pick(self.role.as_deref(), &current.role),
            department: pick(self.department.as_deref(), &current.department),
        }
    }
}

fn pick(supplied: Option<&str>, current: &str) -> String {
    match supplied {
        Some(value) if !is_blank(value) => value.to_string(),
        _ => current.to_string(),
    }
}

/// Result of a delete request that found its target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Record removed; carries the removed employee.
    Deleted(Employee),
    /// Caller declined at confirmation; nothing changed.
    Cancelled,
}

/// Use-case service over an employee repository.
pub struct EmployeeService<R: EmployeeRepository> {
    repo: R,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Adds a new employee.
    ///
    /// # Errors
    /// - `Validation` when `id` or `name` is blank.
    /// - `DuplicateId` when the id is already taken; the store is unchanged.
    pub fn add_employee(&mut self, request: NewEmployee) -> RepoResult<()> {
        let employee = Employee::new(request.id, request.name)?
            .with_role(request.role.unwrap_or_default())
            .with_department(request.department.unwrap_or_default());
        let id = employee.id.clone();

        match self.repo.create_employee(employee) {
            Ok(()) => {
                info!("event=employee_add module=service status=ok id={id}");
                Ok(())
            }
            Err(err) => {
                info!("event=employee_add module=service status=rejected id={id} reason={err}");
                Err(err)
            }
        }
    }

    /// Lists every employee in insertion order.
    pub fn list_employees(&self) -> &[Employee] {
        self.repo.list_employees()
    }

    /// Returns employees whose fields contain `term`, ignoring case.
    pub fn search_employees(&self, term: &str) -> Vec<&Employee> {
        let query = SearchQuery::new(term);
        let hits = search_employees(self.repo.list_employees(), &query);
        debug!(
            "event=employee_search module=service status=ok match_all={} hits={}",
            query.is_match_all(),
            hits.len()
        );
        hits
    }

    pub fn get_employee(&self, id: &str) -> Option<&Employee> {
        self.repo.get_employee(id)
    }

    pub fn find_index_by_id(&self, id: &str) -> Option<usize> {
        self.repo.find_index_by_id(id)
    }

    pub fn len(&self) -> usize {
        self.repo.list_employees().len()
    }

    pub fn is_empty(&self) -> bool {
        self.repo.list_employees().is_empty()
    }

    /// Applies `update` to the employee with `id` and returns the new record.
    ///
    /// # Errors
    /// - `NotFound` when no employee has `id`; the store is unchanged.
    pub fn update_employee(&mut self, id: &str, update: &EmployeeUpdate) -> RepoResult<Employee> {
        let current = self
            .repo
            .get_employee(id)
            .ok_or_else(|| RepoError::NotFound(id.to_string()))?;
        let updated = update.apply_to(current);

        self.repo.update_employee(updated.clone())?;
        info!("event=employee_update module=service status=ok id={id}");
        Ok(updated)
    }

    /// Deletes the employee with `id` once `confirmed` is true.
    ///
    /// # Errors
    /// - `NotFound` when no employee has `id`, regardless of `confirmed`.
    pub fn delete_employee(&mut self, id: &str, confirmed: bool) -> RepoResult<DeleteOutcome> {
        if self.repo.find_index_by_id(id).is_none() {
            return Err(RepoError::NotFound(id.to_string()));
        }
        if !confirmed {
            info!("event=employee_delete module=service status=cancelled id={id}");
            return Ok(DeleteOutcome::Cancelled);
        }

        let removed = self.repo.delete_employee(id)?;
        info!("event=employee_delete module=service status=ok id={id}");
        Ok(DeleteOutcome::Deleted(removed))
    }
}

impl<R: EmployeeRepository + Default> Default for EmployeeService<R> {
    fn default() -> Self {
        Self::new(R::default())
    }
}

#[cfg(test)]
mod tests {
    use super::{pick, EmployeeUpdate};
    use crate::model::employee::Employee;

    #[test]
    fn pick_keeps_current_for_missing_or_blank_values() {
        assert_eq!(pick(None, "kept"), "kept");
        assert_eq!(pick(Some(""), "kept"), "kept");
        assert_eq!(pick(Some("  "), "kept"), "kept");
        assert_eq!(pick(Some("new"), "kept"), "new");
    }

    #[test]
    fn apply_to_never_touches_id() {
        let current = Employee::new("7", "Grace Hopper")
            .unwrap()
            .with_role("Admiral");
        let updated = EmployeeUpdate::default()
            .name("Grace B. Hopper")
            .apply_to(&current);

        assert_eq!(updated.id, "7");
        assert_eq!(updated.name, "Grace B. Hopper");
        assert_eq!(updated.role, "Admiral");
        assert_eq!(updated.department, "");
    }
}
