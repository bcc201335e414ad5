//! Customers page endpoint: filtered account list plus the page's
//! analytics panels

use crate::handlers::{
    HandlerError, PaginationInfo, active_filter, bad_request, invalid_parameters,
};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    response::Json,
};
use opsdeck_core::types::{Customer, CustomerStatus};
use opsdeck_core::utils::initials;
use opsdeck_data::datasets::customers::{
    AcquisitionMonth, CustomerMetrics, SegmentRevenue, TopCustomer,
};
use opsdeck_data::query::{self, CustomerFilter};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use validator::Validate;

/// Query parameters for the customer list
#[derive(Debug, Deserialize, Validate)]
pub struct ListCustomersQuery {
    /// Free-text search over name and company
    #[validate(length(max = 100))]
    pub search: Option<String>,

    /// Status filter ("all" or absent disables it)
    #[validate(length(max = 20))]
    pub status: Option<String>,

    /// Number of accounts to return
    #[validate(range(min = 1, max = 1000))]
    pub limit: Option<i64>,

    /// Offset for pagination
    #[validate(range(min = 0))]
    pub offset: Option<i64>,
}

/// An account row in the list
#[derive(Debug, Serialize)]
pub struct CustomerSummary {
    /// The account record
    #[serde(flatten)]
    pub customer: Customer,

    /// Avatar fallback initials
    pub initials: String,
}

/// Customers page payload
#[derive(Debug, Serialize)]
pub struct CustomersResponse {
    /// Filtered, paginated account rows
    pub customers: Vec<CustomerSummary>,

    /// Total accounts matching the filters
    pub total: i64,

    /// Number of accounts returned
    pub count: i64,

    /// Current offset
    pub offset: i64,

    /// Pagination info
    pub pagination: PaginationInfo,

    /// Card metrics
    pub metrics: CustomerMetrics,

    /// Won/lost accounts per month
    pub acquisition_trend: Vec<AcquisitionMonth>,

    /// Revenue per segment
    pub revenue_by_segment: Vec<SegmentRevenue>,

    /// Largest accounts
    pub top_customers: Vec<TopCustomer>,
}

/// Customers page data with search and status filtering
///
/// The search matches name or company case-insensitively; the status
/// filter is exact. Both predicates must pass, and the result keeps
/// dataset order.
///
/// # Errors
///
/// * `BAD_REQUEST` - Invalid query parameters or an unknown status
///
/// # Example
///
/// ```text
/// GET /api/customers?search=tech&status=all&limit=50
/// ```
pub async fn list_customers(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListCustomersQuery>,
) -> Result<Json<CustomersResponse>, HandlerError> {
    if let Err(validation_errors) = query.validate() {
        return Err(invalid_parameters(&validation_errors));
    }

    let status = match active_filter(query.status.as_deref()) {
        Some(raw) => Some(raw.parse::<CustomerStatus>().map_err(|e| bad_request(e.to_string()))?),
        None => None,
    };

    let limit = query
        .limit
        .unwrap_or(state.config.api.default_page_size)
        .min(state.config.api.max_page_size);
    let offset = query.offset.unwrap_or(0);

    info!(
        search = query.search.as_deref().unwrap_or(""),
        status = ?status,
        limit,
        offset,
        "Listing customers"
    );

    // "all" is a sentinel only for the status dropdown; the search
    // box can legitimately contain it
    let filter = CustomerFilter {
        search: query.search.as_deref(),
        status,
    };

    let filtered = query::filter_customers(&state.store.customers, &filter);
    let total = i64::try_from(filtered.len()).unwrap_or(i64::MAX);

    let customers: Vec<CustomerSummary> = query::page(&filtered, limit, offset)
        .into_iter()
        .map(|customer| CustomerSummary {
            initials: initials(&customer.name),
            customer,
        })
        .collect();

    let count = i64::try_from(customers.len()).unwrap_or(i64::MAX);

    Ok(Json(CustomersResponse {
        customers,
        total,
        count,
        offset,
        pagination: PaginationInfo::new(limit, offset, total),
        metrics: state.store.customer_metrics.clone(),
        acquisition_trend: state.store.acquisition_trend.clone(),
        revenue_by_segment: state.store.revenue_by_segment.clone(),
        top_customers: state.store.top_customers.clone(),
    }))
}
