use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use service_core::utils::now_iso8601;

use crate::startup::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    /// Seconds since the server started.
    pub uptime: f64,
    pub environment: String,
}

/// Liveness check. Always answers 200.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        timestamp: now_iso8601(),
        uptime: state.uptime().as_secs_f64(),
        environment: state.config.environment().to_string(),
    })
}
