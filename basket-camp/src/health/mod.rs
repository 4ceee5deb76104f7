//! Health check endpoint
//!
//! Reports liveness plus whether the dispatch backend could send right now.
//! A site with incomplete provider settings still serves pages, so it
//! reports `degraded` rather than `unhealthy`.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health check status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Serving pages and able to dispatch
    Healthy,
    /// Serving pages, dispatch would fail
    Degraded,
}

/// Health report body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    /// Overall status
    pub status: HealthStatus,
    /// Crate version
    pub version: String,
    /// Active dispatch backend
    pub dispatch_backend: String,
    /// Whether the dispatch backend is fully configured
    pub dispatch_ready: bool,
}

/// `GET /health`
pub async fn health_check(State(state): State<AppState>) -> Json<HealthReport> {
    let dispatch_ready = state.dispatcher().is_ready();

    Json(HealthReport {
        status: if dispatch_ready {
            HealthStatus::Healthy
        } else {
            HealthStatus::Degraded
        },
        version: env!("CARGO_PKG_VERSION").to_string(),
        dispatch_backend: state.config().dispatch.backend.as_str().to_string(),
        dispatch_ready,
    })
}
