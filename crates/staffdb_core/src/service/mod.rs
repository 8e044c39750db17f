//! Staff use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into the menu operations.
//! - Keep the console layer decoupled from storage details.
//!
//! # Invariants
//! - Services depend only on repository traits, never on a connection.
//! - Every service is stateless between calls.

pub mod address_service;
pub mod department_service;
pub mod employee_service;
pub mod town_service;
