//! Employee domain model.
//!
//! # Responsibility
//! - Define the single record shape held by the store.
//! - Keep presence validation next to the data it guards.
//!
//! # Invariants
//! - Every employee carries a non-empty `id` and `name`.
//! - `id` never changes after creation.

pub mod employee;
