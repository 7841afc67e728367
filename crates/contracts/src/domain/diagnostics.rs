use serde::Deserialize;
use std::collections::HashMap;

/// One component check from `GET /test/health/system`.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthCheckResult {
    pub component: String,
    /// "ok", "warning" or "error".
    pub status: String,
    pub message: String,
    #[serde(default)]
    pub details: serde_json::Value,
}

/// Full diagnostics report.
#[derive(Debug, Clone, Deserialize)]
pub struct SystemHealth {
    /// "healthy", "degraded" or "unhealthy".
    pub overall_status: String,
    pub checks: Vec<HealthCheckResult>,
    #[serde(default)]
    pub summary: HashMap<String, i64>,
}

/// Reply of the simple liveness probe `GET /test/health/`.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}
