//! Audit log emitting structured tracing events.

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::audit::{AuditEntry, AuditLog};

/// Writes every audit entry as an event on the `audit` target.
///
/// Rejections are logged at `WARN`, everything else at `INFO`. With
/// `LOG_FORMAT=json` the fields are emitted as separate JSON keys.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAuditLog;

impl TracingAuditLog {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AuditLog for TracingAuditLog {
    async fn record(&self, entry: AuditEntry) {
        let direction = entry.direction().as_str();
        match &entry {
            AuditEntry::Resolved { request, response, .. } => info!(
                target: "audit",
                direction,
                outcome = "resolved",
                request = %request,
                response = %response,
                "{}", entry
            ),
            AuditEntry::Created {
                request,
                response,
                page,
                ..
            } => info!(
                target: "audit",
                direction,
                outcome = "created",
                page = %page,
                request = %request,
                response = %response,
                "{}", entry
            ),
            AuditEntry::Rejected { request, reason, .. } => warn!(
                target: "audit",
                direction,
                outcome = "rejected",
                request = %request,
                reason = %reason,
                "{}", entry
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::audit::Direction;

    #[tokio::test]
    async fn test_record_does_not_panic_without_subscriber() {
        let audit = TracingAuditLog::new();

        audit
            .record(AuditEntry::Rejected {
                direction: Direction::ToDeeplink,
                request: "not a url".to_string(),
                reason: "whitespace".to_string(),
            })
            .await;
    }
}
