//! Liveness endpoint

use axum::{extract::State, Json};
use serde::Serialize;

use crate::server::AppState;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
    pub environment: String,
    pub webhook_configured: bool,
    pub uptime_secs: u64,
}

/// GET /healthz
pub async fn healthz(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: muhbir_core::VERSION,
        environment: state.config.webhook.environment.clone(),
        webhook_configured: state.config.webhook.url.is_some(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}
