//! Case-insensitive substring search.
//!
//! # Responsibility
//! - Match a free-text term against `id`, `name`, `role` and `department`.
//!
//! # Invariants
//! - An empty term matches every record.
//! - Results keep the store's insertion order.

use crate::model::employee::Employee;

/// Normalized search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Lowercased term used for matching.
    needle: String,
}

impl SearchQuery {
    pub fn new(text: impl AsRef<str>) -> Self {
        Self {
            needle: text.as_ref().to_lowercase(),
        }
    }

    /// Returns the lowercased term.
    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// Returns whether the query selects every record.
    pub fn is_match_all(&self) -> bool {
        self.needle.is_empty()
    }

    /// Returns whether any of the four fields contains the term.
    pub fn matches(&self, employee: &Employee) -> bool {
        if self.is_match_all() {
            return true;
        }

        [
            employee.id.as_str(),
            employee.name.as_str(),
            employee.role.as_str(),
            employee.department.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&self.needle))
    }
}

/// Filters `employees` down to the records matching `query`.
pub fn search_employees<'a>(employees: &'a [Employee], query: &SearchQuery) -> Vec<&'a Employee> {
    employees
        .iter()
        .filter(|employee| query.matches(employee))
        .collect()
}
