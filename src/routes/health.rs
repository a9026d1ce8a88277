use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

use super::AppState;

#[derive(Debug, Serialize)]
pub struct HealthCheckResponse {
    pub status: String,
    pub database: HealthStatus,
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub latency_ms: Option<u64>,
}

/// Health check endpoint
pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let start = std::time::Instant::now();

    let database = match tokio::time::timeout(
        Duration::from_secs(5),
        state.repository.pool.acquire(),
    )
    .await
    {
        Ok(Ok(_conn)) => HealthStatus {
            status: "healthy".to_string(),
            latency_ms: Some(start.elapsed().as_millis() as u64),
        },
        Ok(Err(_)) | Err(_) => HealthStatus {
            status: "unhealthy".to_string(),
            latency_ms: None,
        },
    };

    let status = if database.status == "healthy" {
        "healthy"
    } else {
        "degraded"
    };

    Json(HealthCheckResponse {
        status: status.to_string(),
        database,
    })
}
