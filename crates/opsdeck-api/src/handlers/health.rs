//! Health check endpoints for monitoring and diagnostics

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::Json};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Timestamp of the check
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// System uptime in seconds
    pub uptime_seconds: u64,
}

/// Readiness check response (simpler than health)
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    /// Service readiness status
    pub ready: bool,
    /// Timestamp of the check
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Detailed health response with per-component status
#[derive(Debug, Serialize)]
pub struct DetailedHealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Timestamp of the check
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// System uptime in seconds
    pub uptime_seconds: u64,
    /// Dataset store status
    pub datasets: DatasetHealth,
    /// Live feed status
    pub live_feed: LiveFeedHealth,
}

/// Dataset store health
#[derive(Debug, Serialize)]
pub struct DatasetHealth {
    /// Whether every collection seeded
    pub seeded: bool,
    /// Customer record count
    pub customers: usize,
    /// Employee record count
    pub employees: usize,
    /// Inventory item count
    pub inventory_items: usize,
    /// Production line count
    pub production_lines: usize,
}

/// Live feed health
#[derive(Debug, Serialize)]
pub struct LiveFeedHealth {
    /// Whether the feed is ticking
    pub enabled: bool,
    /// Ticks applied so far
    pub ticks: u64,
}

/// Basic health check endpoint for monitoring systems
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        uptime_seconds: state.uptime_seconds(),
    })
}

/// Readiness check endpoint for orchestrator-style probes
///
/// Returns 200 OK once the dataset store is seeded and the service is
/// ready to accept traffic.
pub async fn readiness_check(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ReadinessResponse>, StatusCode> {
    if state.store.customers.is_empty() {
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    }

    Ok(Json(ReadinessResponse {
        ready: true,
        timestamp: chrono::Utc::now(),
    }))
}

/// Detailed health check with per-component status
pub async fn detailed_health_check(
    State(state): State<Arc<AppState>>,
) -> Json<DetailedHealthResponse> {
    let snapshot = state.live.snapshot();

    let datasets = DatasetHealth {
        seeded: !state.store.customers.is_empty() && !state.store.production_lines.is_empty(),
        customers: state.store.customers.len(),
        employees: state.store.employees.len(),
        inventory_items: state.store.inventory.len(),
        production_lines: state.store.production_lines.len(),
    };

    info!(
        customers = datasets.customers,
        live_enabled = state.live.is_running(),
        "Detailed health check"
    );

    Json(DetailedHealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        uptime_seconds: state.uptime_seconds(),
        datasets,
        live_feed: LiveFeedHealth {
            enabled: state.live.is_running(),
            ticks: snapshot.tick,
        },
    })
}
