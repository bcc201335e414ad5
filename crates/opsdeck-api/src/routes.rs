//! API route definitions

use crate::{handlers, state::AppState};
use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;

/// Build the dashboard page routes with basic middleware
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Overview page and the live-activity toggle
        .route("/api/overview", get(handlers::overview::get_overview))
        .route(
            "/api/overview/live",
            get(handlers::overview::get_live_activity).post(handlers::overview::set_live_activity),
        )
        // Page endpoints
        .route("/api/customers", get(handlers::customers::list_customers))
        .route("/api/hr", get(handlers::hr::get_hr_overview))
        .route("/api/hr/employees", get(handlers::hr::list_employees))
        .route("/api/inventory", get(handlers::inventory::list_inventory))
        .route("/api/operations", get(handlers::operations::get_operations))
        .route("/api/financial", get(handlers::financial::get_financial))
        .route("/api/reports", get(handlers::reports::list_reports))
        .route("/api/analytics", get(handlers::analytics::get_analytics))
        .route("/api/settings", get(handlers::settings::get_settings))
        // Service info endpoints
        .route("/", get(root_endpoint))
        .route("/api", get(api_info))
        // Apply basic middleware
        .layer(CompressionLayer::new())
}

/// Build health check routes
pub fn health_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        .route(
            "/health/detailed",
            get(handlers::health::detailed_health_check),
        )
}

/// Combine all routes into a single router
pub fn build_router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(api_routes())
        .merge(health_routes())
        // Fallback handler for unknown routes
        .fallback(not_found_handler)
}

/// Handle 404 Not Found errors
async fn not_found_handler() -> (axum::http::StatusCode, axum::Json<serde_json::Value>) {
    (
        axum::http::StatusCode::NOT_FOUND,
        axum::Json(serde_json::json!({
            "error": "Not Found",
            "code": "ROUTE_NOT_FOUND",
            "message": "The requested endpoint does not exist"
        })),
    )
}

/// Root endpoint for basic connectivity
async fn root_endpoint() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "service": "Opsdeck Dashboard API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "ok"
    }))
}

/// API info endpoint
async fn api_info() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "api": "Opsdeck Dashboard API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "overview": "/api/overview",
            "live": "/api/overview/live",
            "customers": "/api/customers",
            "hr": "/api/hr",
            "employees": "/api/hr/employees",
            "inventory": "/api/inventory",
            "operations": "/api/operations",
            "financial": "/api/financial",
            "reports": "/api/reports",
            "analytics": "/api/analytics",
            "settings": "/api/settings",
            "health": "/health"
        }
    }))
}
