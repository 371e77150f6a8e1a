//! Audit log implementations.

mod tracing_audit_log;

pub use tracing_audit_log::TracingAuditLog;
