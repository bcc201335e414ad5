//! Operations page endpoint: production lines with derived progress
//! and the floor summary

use crate::handlers::overview::MetricProgress;
use crate::state::AppState;
use axum::{extract::State, response::Json};
use opsdeck_core::types::ProductionLine;
use opsdeck_data::aggregate;
use opsdeck_data::datasets::operations::{
    EfficiencySample, FloorAlert, QualityMonth, UtilizationSlice,
};
use serde::Serialize;
use std::sync::Arc;

/// A production line with its derived output progress
#[derive(Debug, Serialize)]
pub struct LineSummary {
    /// The line record
    #[serde(flatten)]
    pub line: ProductionLine,

    /// `output / target` as a percentage, uncapped; `null` when the
    /// target is zero
    pub output_progress: Option<f64>,
}

/// Floor-wide summary figures
#[derive(Debug, Serialize)]
pub struct FloorSummary {
    /// Lines currently running
    pub running_lines: usize,

    /// All lines on the floor
    pub total_lines: usize,

    /// Mean efficiency over the running lines; `null` when nothing is
    /// running
    pub average_efficiency: Option<f64>,

    /// Total units produced across all lines
    pub total_output: i64,
}

/// Operations page payload
#[derive(Debug, Serialize)]
pub struct OperationsResponse {
    /// Production lines with derived progress
    pub production_lines: Vec<LineSummary>,

    /// Floor-wide summary
    pub summary: FloorSummary,

    /// Operation metrics with computed progress
    pub metrics: Vec<MetricProgress>,

    /// Intraday efficiency samples
    pub efficiency_trend: Vec<EfficiencySample>,

    /// Quality metrics per month
    pub quality_metrics: Vec<QualityMonth>,

    /// Resource utilization
    pub utilization: Vec<UtilizationSlice>,

    /// Floor alerts
    pub alerts: Vec<FloorAlert>,
}

/// Operations page data
///
/// The average efficiency is taken over running lines only and is
/// `null` when no line is running, so a floor in full maintenance
/// renders a placeholder instead of a division by zero.
pub async fn get_operations(State(state): State<Arc<AppState>>) -> Json<OperationsResponse> {
    let store = &state.store;
    let lines = &store.production_lines;

    #[allow(clippy::cast_precision_loss)]
    let production_lines: Vec<LineSummary> = lines
        .iter()
        .map(|line| LineSummary {
            output_progress: aggregate::progress_percent(line.output as f64, line.target as f64),
            line: line.clone(),
        })
        .collect();

    let summary = FloorSummary {
        running_lines: aggregate::running_line_count(lines),
        total_lines: lines.len(),
        average_efficiency: aggregate::average_running_efficiency(lines),
        total_output: aggregate::total_output(lines),
    };

    let metrics = store
        .operation_metrics
        .iter()
        .map(MetricProgress::from_metric)
        .collect();

    Json(OperationsResponse {
        production_lines,
        summary,
        metrics,
        efficiency_trend: store.efficiency_trend.clone(),
        quality_metrics: store.quality_metrics.clone(),
        utilization: store.utilization.clone(),
        alerts: store.floor_alerts.clone(),
    })
}
