//! Staff domain model.
//!
//! # Responsibility
//! - Define the row shapes for towns, addresses, departments and employees.
//! - Provide the exact fixed-point `Decimal` used for salaries and factors.
//!
//! # Invariants
//! - Every entity is identified by its integer primary key.
//! - Relationships are plain foreign-key ids; nothing here holds a live
//!   object graph, so deletes never cascade through in-memory collections.

pub mod decimal;
pub mod entities;
