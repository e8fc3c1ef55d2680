//! Core use-case services.
//!
//! # Responsibility
//! - Turn menu actions into repository calls.
//! - Keep the CLI decoupled from storage details.

pub mod employee_service;
