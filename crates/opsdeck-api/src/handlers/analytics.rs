//! Analytics page endpoint

use crate::state::AppState;
use axum::{extract::State, response::Json};
use opsdeck_core::types::MonthlyUsers;
use opsdeck_data::datasets::analytics::{
    DeviceShare, EngagementMonth, FunnelStage, PageStat, RealtimeMetrics, TrafficSource,
};
use serde::Serialize;
use std::sync::Arc;

/// Analytics page payload
#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    /// Engagement per month
    pub engagement: Vec<EngagementMonth>,

    /// Conversion funnel stages
    pub conversion_funnel: Vec<FunnelStage>,

    /// Traffic source split
    pub traffic_sources: Vec<TrafficSource>,

    /// Current site metrics
    pub realtime_metrics: RealtimeMetrics,

    /// Most-viewed pages
    pub top_pages: Vec<PageStat>,

    /// Device class split
    pub device_breakdown: Vec<DeviceShare>,

    /// Monthly active users series (shared with the overview)
    pub monthly_active_users: Vec<MonthlyUsers>,
}

/// Analytics page data
pub async fn get_analytics(State(state): State<Arc<AppState>>) -> Json<AnalyticsResponse> {
    let store = &state.store;

    Json(AnalyticsResponse {
        engagement: store.engagement.clone(),
        conversion_funnel: store.conversion_funnel.clone(),
        traffic_sources: store.traffic_sources.clone(),
        realtime_metrics: store.realtime_metrics.clone(),
        top_pages: store.top_pages.clone(),
        device_breakdown: store.device_breakdown.clone(),
        monthly_active_users: store.monthly_active_users.clone(),
    })
}
