//! Infrastructure layer for external integrations.
//!
//! Implements the collaborator traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`audit`] - Audit log backed by `tracing`
//! - [`persistence`] - PostgreSQL and in-memory link repositories

pub mod audit;
pub mod persistence;
