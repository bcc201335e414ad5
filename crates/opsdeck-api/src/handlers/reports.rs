//! Reports page endpoint: category-filtered templates plus the
//! report tables

use crate::handlers::{HandlerError, active_filter, invalid_parameters};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    response::Json,
};
use opsdeck_data::datasets::reports::{
    ComplianceReport, GeneratedReport, ReportTemplate, ScheduledReport,
};
use opsdeck_data::query::{self, ReportFilter};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use validator::Validate;

/// Query parameters for the reports page
#[derive(Debug, Deserialize, Validate)]
pub struct ListReportsQuery {
    /// Category filter ("all" or absent disables it)
    #[validate(length(max = 100))]
    pub category: Option<String>,
}

/// Reports page payload
#[derive(Debug, Serialize)]
pub struct ReportsResponse {
    /// Filtered templates
    pub templates: Vec<ReportTemplate>,

    /// Total templates matching the filter
    pub total: i64,

    /// Template categories, in dataset order
    pub categories: Vec<String>,

    /// Recently generated reports
    pub recent_reports: Vec<GeneratedReport>,

    /// Compliance report rows
    pub compliance_reports: Vec<ComplianceReport>,

    /// Scheduled report runs
    pub scheduled_reports: Vec<ScheduledReport>,
}

/// Reports page data with category filtering
///
/// # Errors
///
/// * `BAD_REQUEST` - Invalid query parameters
///
/// # Example
///
/// ```text
/// GET /api/reports?category=Financial
/// ```
pub async fn list_reports(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListReportsQuery>,
) -> Result<Json<ReportsResponse>, HandlerError> {
    if let Err(validation_errors) = query.validate() {
        return Err(invalid_parameters(&validation_errors));
    }

    info!(
        category = query.category.as_deref().unwrap_or("all"),
        "Listing report templates"
    );

    let filter = ReportFilter {
        category: active_filter(query.category.as_deref()),
    };

    let templates = query::filter_reports(&state.store.report_templates, &filter);
    let total = i64::try_from(templates.len()).unwrap_or(i64::MAX);

    let mut categories: Vec<String> = Vec::new();
    for template in &state.store.report_templates {
        if !categories.contains(&template.category) {
            categories.push(template.category.clone());
        }
    }

    Ok(Json(ReportsResponse {
        templates,
        total,
        categories,
        recent_reports: state.store.recent_reports.clone(),
        compliance_reports: state.store.compliance_reports.clone(),
        scheduled_reports: state.store.scheduled_reports.clone(),
    }))
}
