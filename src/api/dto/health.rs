//! Body of `GET /health`.

use serde::Serialize;

/// Overall service status: `healthy` when the mapping store answers,
/// `degraded` otherwise.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub checks: HealthChecks,
}

impl HealthResponse {
    pub fn new(database: CheckStatus) -> Self {
        let status = if database.is_ok() { "healthy" } else { "degraded" };
        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            checks: HealthChecks { database },
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.checks.database.is_ok()
    }
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    /// Reachability of the link mapping store.
    pub database: CheckStatus,
}

/// Outcome of a single component probe.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckStatus {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: "ok",
            message: Some(message.into()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: Some(message.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degraded_when_store_fails() {
        let response = HealthResponse::new(CheckStatus::error("Database error: timeout"));

        assert!(!response.is_healthy());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "degraded");
        assert_eq!(json["checks"]["database"]["status"], "error");
    }

    #[test]
    fn test_healthy_when_store_answers() {
        let response = HealthResponse::new(CheckStatus::ok("Connected"));

        assert!(response.is_healthy());
        assert_eq!(serde_json::to_value(&response).unwrap()["status"], "healthy");
    }
}
