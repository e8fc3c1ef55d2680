//! Core record store for the staffdesk employee manager.
//! This crate owns every employee invariant; the CLI only collects input.

pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;

pub use logging::{default_log_level, init_logging, LoggingError};
pub use model::employee::{Employee, EmployeeId, EmployeeValidationError};
pub use repo::employee_repo::{
    EmployeeRepository, InMemoryEmployeeRepository, RepoError, RepoResult,
};
pub use search::filter::{search_employees, SearchQuery};
pub use service::employee_service::{DeleteOutcome, EmployeeService, EmployeeUpdate, NewEmployee};
