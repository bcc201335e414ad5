//! HR page endpoints: workforce panels and the filtered employee
//! roster

use crate::handlers::{HandlerError, PaginationInfo, active_filter, invalid_parameters};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    response::Json,
};
use opsdeck_core::types::{DepartmentPerformance, Employee};
use opsdeck_core::utils::initials;
use opsdeck_data::aggregate;
use opsdeck_data::datasets::hr::{
    DepartmentHeadcount, HiringMonth, HrMetrics, PerformanceBand, TrainingProgram, UpcomingReview,
};
use opsdeck_data::query::{self, EmployeeFilter};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use validator::Validate;

/// Query parameters for the employee roster
#[derive(Debug, Deserialize, Validate)]
pub struct ListEmployeesQuery {
    /// Free-text search over name, department, and position
    #[validate(length(max = 100))]
    pub search: Option<String>,

    /// Department filter ("all" or absent disables it)
    #[validate(length(max = 100))]
    pub department: Option<String>,

    /// Number of employees to return
    #[validate(range(min = 1, max = 1000))]
    pub limit: Option<i64>,

    /// Offset for pagination
    #[validate(range(min = 0))]
    pub offset: Option<i64>,
}

/// An employee row in the roster
#[derive(Debug, Serialize)]
pub struct EmployeeSummary {
    /// The employee record
    #[serde(flatten)]
    pub employee: Employee,

    /// Avatar fallback initials
    pub initials: String,
}

/// Employee roster payload
#[derive(Debug, Serialize)]
pub struct EmployeesResponse {
    /// Filtered, paginated roster rows
    pub employees: Vec<EmployeeSummary>,

    /// Total employees matching the filters
    pub total: i64,

    /// Number of employees returned
    pub count: i64,

    /// Current offset
    pub offset: i64,

    /// Pagination info
    pub pagination: PaginationInfo,

    /// Departments for the filter dropdown, in roster order
    pub departments: Vec<String>,
}

/// A training program with its derived completion rate
#[derive(Debug, Serialize)]
pub struct TrainingProgramSummary {
    /// The program counts
    #[serde(flatten)]
    pub program: TrainingProgram,

    /// `completed / enrolled` as a percentage; `null` when nobody is
    /// enrolled
    pub completion_percent: Option<f64>,
}

/// HR page panels payload
#[derive(Debug, Serialize)]
pub struct HrOverviewResponse {
    /// Card metrics
    pub metrics: HrMetrics,

    /// Headcount per department
    pub department_breakdown: Vec<DepartmentHeadcount>,

    /// Hires/departures per month
    pub hiring_trend: Vec<HiringMonth>,

    /// Performance-rating distribution
    pub performance_distribution: Vec<PerformanceBand>,

    /// Reviews coming due
    pub upcoming_reviews: Vec<UpcomingReview>,

    /// Training programs with derived completion rates
    pub training_programs: Vec<TrainingProgramSummary>,

    /// Department performance scores (shared with the overview)
    pub department_performance: Vec<DepartmentPerformance>,
}

/// HR page panels
pub async fn get_hr_overview(State(state): State<Arc<AppState>>) -> Json<HrOverviewResponse> {
    let store = &state.store;

    #[allow(clippy::cast_precision_loss)]
    let training_programs = store
        .training_programs
        .iter()
        .map(|program| TrainingProgramSummary {
            completion_percent: aggregate::progress_percent(
                program.completed as f64,
                program.enrolled as f64,
            ),
            program: program.clone(),
        })
        .collect();

    Json(HrOverviewResponse {
        metrics: store.hr_metrics.clone(),
        department_breakdown: store.department_breakdown.clone(),
        hiring_trend: store.hiring_trend.clone(),
        performance_distribution: store.performance_distribution.clone(),
        upcoming_reviews: store.upcoming_reviews.clone(),
        training_programs,
        department_performance: store.department_performance.clone(),
    })
}

/// Employee roster with search and department filtering
///
/// The search matches name, department, or position case-insensitively;
/// the department filter is exact.
///
/// # Errors
///
/// * `BAD_REQUEST` - Invalid query parameters
///
/// # Example
///
/// ```text
/// GET /api/hr/employees?search=engineer&department=all
/// ```
pub async fn list_employees(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListEmployeesQuery>,
) -> Result<Json<EmployeesResponse>, HandlerError> {
    if let Err(validation_errors) = query.validate() {
        return Err(invalid_parameters(&validation_errors));
    }

    let limit = query
        .limit
        .unwrap_or(state.config.api.default_page_size)
        .min(state.config.api.max_page_size);
    let offset = query.offset.unwrap_or(0);

    info!(
        search = query.search.as_deref().unwrap_or(""),
        department = query.department.as_deref().unwrap_or("all"),
        "Listing employees"
    );

    // "all" is a sentinel only for the department dropdown; the
    // search box can legitimately contain it
    let filter = EmployeeFilter {
        search: query.search.as_deref(),
        department: active_filter(query.department.as_deref()),
    };

    let filtered = query::filter_employees(&state.store.employees, &filter);
    let total = i64::try_from(filtered.len()).unwrap_or(i64::MAX);

    let employees: Vec<EmployeeSummary> = query::page(&filtered, limit, offset)
        .into_iter()
        .map(|employee| EmployeeSummary {
            initials: initials(&employee.name),
            employee,
        })
        .collect();

    let count = i64::try_from(employees.len()).unwrap_or(i64::MAX);

    Ok(Json(EmployeesResponse {
        employees,
        total,
        count,
        offset,
        pagination: PaginationInfo::new(limit, offset, total),
        departments: state.store.departments(),
    }))
}
