//! Static liveness and readiness probes.

use axum::{extract::State, response::IntoResponse, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl HealthResponse {
    fn new(status: &str, service: &str, version: Option<&str>) -> Self {
        Self {
            status: status.to_string(),
            service: service.to_string(),
            timestamp: Utc::now(),
            version: version.map(str::to_string),
        }
    }
}

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse::new(
        "UP",
        &state.config.service_name,
        Some(&state.config.service_version),
    ))
}

pub async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse::new("READY", &state.config.service_name, None))
}

pub async fn live(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse::new("ALIVE", &state.config.service_name, None))
}
