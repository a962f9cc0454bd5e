//! Health and readiness probes
//!
//! The host is healthy while the process runs; it is ready once the
//! built app shell exists on disk.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    pub uptime_seconds: u64,
    pub timestamp: i64,
}

/// Liveness probe response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LivenessResponse {
    pub alive: bool,
    pub timestamp: i64,
}

/// Readiness probe response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub reason: Option<String>,
    pub timestamp: i64,
}

pub struct HealthChecker {
    start_time: Instant,
    version: String,
    index_path: PathBuf,
}

impl HealthChecker {
    pub fn new(version: &str, index_path: PathBuf) -> Self {
        Self {
            start_time: Instant::now(),
            version: version.to_string(),
            index_path,
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    pub fn health(&self) -> HealthResponse {
        HealthResponse {
            status: HealthStatus::Healthy,
            version: self.version.clone(),
            uptime_seconds: self.uptime_seconds(),
            timestamp: chrono::Utc::now().timestamp(),
        }
    }

    pub fn liveness(&self) -> LivenessResponse {
        LivenessResponse {
            alive: true,
            timestamp: chrono::Utc::now().timestamp(),
        }
    }

    pub fn readiness(&self) -> ReadinessResponse {
        let reason = (!self.index_path.is_file())
            .then(|| format!("App shell {} is missing", self.index_path.display()));

        ReadinessResponse {
            ready: reason.is_none(),
            reason,
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

pub async fn health_check(State(checker): State<Arc<HealthChecker>>) -> Json<HealthResponse> {
    Json(checker.health())
}

pub async fn liveness_probe(State(checker): State<Arc<HealthChecker>>) -> Json<LivenessResponse> {
    Json(checker.liveness())
}

pub async fn readiness_probe(
    State(checker): State<Arc<HealthChecker>>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let readiness = checker.readiness();
    let status = if readiness.ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(readiness))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_reports_version() {
        let checker = HealthChecker::new("1.2.3", PathBuf::from("missing/index.html"));
        let health = checker.health();

        assert_eq!(health.status, HealthStatus::Healthy);
        assert_eq!(health.version, "1.2.3");
        assert!(health.timestamp > 0);
        assert!(checker.liveness().alive);
    }

    #[test]
    fn test_not_ready_without_index() {
        let checker = HealthChecker::new("0.1.0", PathBuf::from("/nonexistent/index.html"));
        let readiness = checker.readiness();

        assert!(!readiness.ready);
        assert!(readiness.reason.unwrap().contains("index.html"));
    }

    #[test]
    fn test_ready_with_index() {
        let dir = tempfile::tempdir().unwrap();
        let index = dir.path().join("index.html");
        std::fs::write(&index, "<html></html>").unwrap();

        let readiness = HealthChecker::new("0.1.0", index).readiness();
        assert!(readiness.ready);
        assert!(readiness.reason.is_none());
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&HealthStatus::Healthy).unwrap();
        assert_eq!(json, "\"healthy\"");
    }
}
