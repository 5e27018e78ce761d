//! Health and readiness endpoints

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub checks: ReadyChecks,
}

#[derive(Debug, Serialize)]
pub struct ReadyChecks {
    pub store: CheckResult,
}

#[derive(Debug, Serialize)]
pub struct CheckResult {
    pub healthy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Liveness probe. Always succeeds while the process is up.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "auth-api",
    })
}

/// Readiness probe. Verifies the backing store is reachable.
pub async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ReadyResponse>) {
    let start = std::time::Instant::now();

    let store = match state.store.ping().await {
        Ok(()) => CheckResult {
            healthy: true,
            latency_ms: Some(start.elapsed().as_millis() as u64),
            error: None,
        },
        Err(e) => {
            tracing::warn!(error = %e, "store readiness check failed");
            CheckResult {
                healthy: false,
                latency_ms: None,
                error: Some(e.to_string()),
            }
        }
    };

    if store.healthy {
        (
            StatusCode::OK,
            Json(ReadyResponse {
                status: "ready",
                checks: ReadyChecks { store },
            }),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadyResponse {
                status: "not_ready",
                checks: ReadyChecks { store },
            }),
        )
    }
}
