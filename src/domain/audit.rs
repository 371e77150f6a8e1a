//! Audit trail of conversion outcomes.

use async_trait::async_trait;
use std::fmt;

use crate::domain::entities::PageKind;

/// Which way a conversion went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    ToDeeplink,
    ToWebUrl,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::ToDeeplink => "to_deeplink",
            Direction::ToWebUrl => "to_web_url",
        }
    }
}

/// A single conversion outcome reported to the audit log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditEntry {
    /// The counterpart was already in the mapping store.
    Resolved {
        direction: Direction,
        request: String,
        response: String,
    },
    /// The counterpart was translated and handed to the store.
    Created {
        direction: Direction,
        request: String,
        response: String,
        page: PageKind,
    },
    /// The input could not be translated.
    Rejected {
        direction: Direction,
        request: String,
        reason: String,
    },
}

impl AuditEntry {
    pub fn direction(&self) -> Direction {
        match self {
            AuditEntry::Resolved { direction, .. }
            | AuditEntry::Created { direction, .. }
            | AuditEntry::Rejected { direction, .. } => *direction,
        }
    }
}

impl fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuditEntry::Resolved {
                request, response, ..
            } => write!(f, "{request} exists in store, returned {response}"),
            AuditEntry::Created {
                request,
                response,
                page,
                ..
            } => write!(f, "{request} converted to {response} ({page} page)"),
            AuditEntry::Rejected {
                request, reason, ..
            } => write!(f, "{request} rejected: {reason}"),
        }
    }
}

/// Sink for conversion outcomes.
///
/// Recording is fire-and-forget: implementations must not fail the caller.
///
/// # Implementations
///
/// - [`crate::infrastructure::audit::TracingAuditLog`] - structured log events
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuditLog: Send + Sync {
    async fn record(&self, entry: AuditEntry);
}
