//! Dashboard overview endpoints: the landing page payload and the
//! live-activity toggle

use crate::handlers::{ErrorResponse, HandlerError};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::Json};
use opsdeck_core::types::{
    CustomerSegment, DepartmentPerformance, FiscalMonth, Kpi, MonthlyUsers, OperationMetric,
    RegionSales,
};
use opsdeck_data::aggregate;
use opsdeck_live::{ActivitySnapshot, LiveError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

/// An operation metric with its computed progress against target
#[derive(Debug, Serialize)]
pub struct MetricProgress {
    /// The metric itself
    #[serde(flatten)]
    pub metric: OperationMetric,

    /// `actual / target` as a percentage, uncapped; `null` when the
    /// target is zero
    pub progress_percent: Option<f64>,
}

impl MetricProgress {
    pub(crate) fn from_metric(metric: &OperationMetric) -> Self {
        let progress_percent = aggregate::progress_percent(metric.actual, metric.target);
        Self {
            metric: metric.clone(),
            progress_percent,
        }
    }
}

/// Overview page payload
#[derive(Debug, Serialize)]
pub struct OverviewResponse {
    /// KPI cards
    pub kpis: Vec<Kpi>,
    /// Revenue/expense/profit series
    pub revenue_by_month: Vec<FiscalMonth>,
    /// Department performance scores
    pub department_performance: Vec<DepartmentPerformance>,
    /// Revenue by sales region
    pub sales_by_region: Vec<RegionSales>,
    /// Customer segment slices
    pub customer_segments: Vec<CustomerSegment>,
    /// Monthly active users series
    pub monthly_active_users: Vec<MonthlyUsers>,
    /// Operation metrics with computed progress
    pub operation_metrics: Vec<MetricProgress>,
    /// When the payload was generated
    pub generated_at: chrono::DateTime<chrono::Utc>,
}

/// Live activity payload
#[derive(Debug, Serialize)]
pub struct LiveActivityResponse {
    /// Whether the feed is ticking
    pub enabled: bool,
    /// Current counter values
    pub snapshot: ActivitySnapshot,
}

/// Live activity toggle request
#[derive(Debug, Deserialize)]
pub struct LiveToggleRequest {
    /// Desired feed state
    pub enabled: bool,
}

/// Overview page data: KPI cards, chart series, and operation metrics
pub async fn get_overview(State(state): State<Arc<AppState>>) -> Json<OverviewResponse> {
    let store = &state.store;

    let operation_metrics = store
        .operation_metrics
        .iter()
        .map(MetricProgress::from_metric)
        .collect();

    Json(OverviewResponse {
        kpis: store.kpis.clone(),
        revenue_by_month: store.revenue_by_month.clone(),
        department_performance: store.department_performance.clone(),
        sales_by_region: store.sales_by_region.clone(),
        customer_segments: store.customer_segments.clone(),
        monthly_active_users: store.monthly_active_users.clone(),
        operation_metrics,
        generated_at: chrono::Utc::now(),
    })
}

/// Current live-activity state and counters
pub async fn get_live_activity(State(state): State<Arc<AppState>>) -> Json<LiveActivityResponse> {
    Json(LiveActivityResponse {
        enabled: state.live.is_running(),
        snapshot: state.live.snapshot(),
    })
}

/// Toggle the live-activity feed
///
/// Setting the state it is already in is a no-op; the response always
/// reflects the state after the call.
///
/// # Errors
///
/// * `INTERNAL_SERVER_ERROR` - The feed task could not be started or
///   stopped
pub async fn set_live_activity(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LiveToggleRequest>,
) -> Result<Json<LiveActivityResponse>, HandlerError> {
    if request.enabled {
        match state.live.start() {
            // A concurrent toggle already started it; the desired
            // state holds either way
            Ok(()) | Err(LiveError::ServiceAlreadyRunning) => {
                info!("Live activity feed enabled");
            }
            Err(e) => {
                error!("Failed to start live feed: {}", e);
                return Err(live_feed_error(&e));
            }
        }
    } else {
        match state.live.stop().await {
            Ok(()) | Err(LiveError::ServiceNotRunning) => {
                info!("Live activity feed disabled");
            }
            Err(e) => {
                error!("Failed to stop live feed: {}", e);
                return Err(live_feed_error(&e));
            }
        }
    }

    Ok(Json(LiveActivityResponse {
        enabled: state.live.is_running(),
        snapshot: state.live.snapshot(),
    }))
}

fn live_feed_error(error: &LiveError) -> HandlerError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: format!("Live feed control failed: {error}"),
            code: "LIVE_FEED_ERROR".to_string(),
            details: None,
        }),
    )
}
