//! Repository layer for employee records.
//!
//! # Responsibility
//! - Define the storage contract used by the service layer.
//! - Hold the process-scoped in-memory collection.
//!
//! # Invariants
//! - Write paths enforce `Employee::validate()` before mutating.
//! - Failed operations leave the collection untouched.

pub mod employee_repo;
