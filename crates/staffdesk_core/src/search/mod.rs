//! Search over the employee collection.
//!
//! # Responsibility
//! - Provide free-text filtering across every employee field.
//!
//! # Invariants
//! - Search never mutates the store.

pub mod filter;
