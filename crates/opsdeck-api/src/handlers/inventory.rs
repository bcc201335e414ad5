//! Inventory page endpoint: filtered item list with computed stock
//! statuses plus the supply-chain panels

use crate::handlers::{
    HandlerError, PaginationInfo, active_filter, bad_request, invalid_parameters,
};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    response::Json,
};
use opsdeck_core::types::{InventoryItem, StockStatus};
use opsdeck_data::aggregate::{self, StockStatusCounts};
use opsdeck_data::datasets::inventory::{
    CategoryBreakdown, InventoryMetrics, ReorderAlert, StockMovement, Supplier,
};
use opsdeck_data::query::{self, InventoryFilter};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use validator::Validate;

/// Query parameters for the inventory list
#[derive(Debug, Deserialize, Validate)]
pub struct ListInventoryQuery {
    /// Free-text search over name and category
    #[validate(length(max = 100))]
    pub search: Option<String>,

    /// Category filter ("all" or absent disables it)
    #[validate(length(max = 100))]
    pub category: Option<String>,

    /// Stock-status filter ("all" or absent disables it)
    #[validate(length(max = 20))]
    pub status: Option<String>,

    /// Number of items to return
    #[validate(range(min = 1, max = 1000))]
    pub limit: Option<i64>,

    /// Offset for pagination
    #[validate(range(min = 0))]
    pub offset: Option<i64>,
}

/// An item row with its derived fields
#[derive(Debug, Serialize)]
pub struct ItemSummary {
    /// The item record
    #[serde(flatten)]
    pub item: InventoryItem,

    /// Stock status computed from the counts
    pub status: StockStatus,

    /// Valuation of the units on hand
    pub stock_value: f64,
}

/// Inventory page payload
#[derive(Debug, Serialize)]
pub struct InventoryResponse {
    /// Filtered, paginated item rows
    pub items: Vec<ItemSummary>,

    /// Total items matching the filters
    pub total: i64,

    /// Number of items returned
    pub count: i64,

    /// Current offset
    pub offset: i64,

    /// Pagination info
    pub pagination: PaginationInfo,

    /// Item counts per computed status, over the filtered view
    pub status_counts: StockStatusCounts,

    /// Categories for the filter dropdown, in dataset order
    pub categories: Vec<String>,

    /// Card metrics
    pub metrics: InventoryMetrics,

    /// Supplier scorecards
    pub suppliers: Vec<Supplier>,

    /// Stock movement per month
    pub stock_movement: Vec<StockMovement>,

    /// Inventory per category
    pub category_breakdown: Vec<CategoryBreakdown>,

    /// Reorder alerts
    pub reorder_alerts: Vec<ReorderAlert>,
}

/// Inventory page data with search, category, and status filtering
///
/// Stock statuses are computed from the stock counts on read, so the
/// status filter and the badges can never disagree with the numbers.
///
/// # Errors
///
/// * `BAD_REQUEST` - Invalid query parameters or an unknown status
///
/// # Example
///
/// ```text
/// GET /api/inventory?search=&category=Electronics&status=in-stock
/// ```
pub async fn list_inventory(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListInventoryQuery>,
) -> Result<Json<InventoryResponse>, HandlerError> {
    if let Err(validation_errors) = query.validate() {
        return Err(invalid_parameters(&validation_errors));
    }

    let status = match active_filter(query.status.as_deref()) {
        Some(raw) => Some(raw.parse::<StockStatus>().map_err(|e| bad_request(e.to_string()))?),
        None => None,
    };

    let limit = query
        .limit
        .unwrap_or(state.config.api.default_page_size)
        .min(state.config.api.max_page_size);
    let offset = query.offset.unwrap_or(0);

    info!(
        search = query.search.as_deref().unwrap_or(""),
        category = query.category.as_deref().unwrap_or("all"),
        status = ?status,
        "Listing inventory"
    );

    // "all" is a sentinel only for the dropdowns; the search box can
    // legitimately contain it
    let filter = InventoryFilter {
        search: query.search.as_deref(),
        category: active_filter(query.category.as_deref()),
        status,
    };

    let filtered = query::filter_inventory(&state.store.inventory, &filter);
    let total = i64::try_from(filtered.len()).unwrap_or(i64::MAX);
    let status_counts = aggregate::stock_status_counts(&filtered);

    let items: Vec<ItemSummary> = query::page(&filtered, limit, offset)
        .into_iter()
        .map(|item| ItemSummary {
            status: item.stock_status(),
            stock_value: item.stock_value(),
            item,
        })
        .collect();

    let count = i64::try_from(items.len()).unwrap_or(i64::MAX);

    Ok(Json(InventoryResponse {
        items,
        total,
        count,
        offset,
        pagination: PaginationInfo::new(limit, offset, total),
        status_counts,
        categories: state.store.inventory_categories(),
        metrics: state.store.inventory_metrics.clone(),
        suppliers: state.store.suppliers.clone(),
        stock_movement: state.store.stock_movement.clone(),
        category_breakdown: state.store.category_breakdown.clone(),
        reorder_alerts: state.store.reorder_alerts.clone(),
    }))
}
