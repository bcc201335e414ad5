//! Pure derived-metric functions for cards and charts
//!
//! Every function here is deterministic and side-effect-free. Ratios
//! over a possibly-empty denominator return `Option` instead of
//! dividing by zero; the rendering layer decides the placeholder.

use opsdeck_core::types::{FiscalMonth, InventoryItem, ProductionLine, StockStatus};
use serde::Serialize;

/// Progress against a target, percent.
///
/// Not clamped: an over-target value reads above 100 (28 against a
/// target of 24 is 116.67). `None` when the target is zero.
#[must_use]
pub fn progress_percent(actual: f64, target: f64) -> Option<f64> {
    if target == 0.0 {
        None
    } else {
        Some(actual / target * 100.0)
    }
}

/// Arithmetic mean; `None` for an empty slice
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        #[allow(clippy::cast_precision_loss)]
        let count = values.len() as f64;
        Some(values.iter().sum::<f64>() / count)
    }
}

/// Mean efficiency over the lines that are currently running.
///
/// `None` when no line is running, so a floor in full maintenance
/// renders a placeholder instead of a division by zero.
#[must_use]
pub fn average_running_efficiency(lines: &[ProductionLine]) -> Option<f64> {
    let running: Vec<f64> = lines
        .iter()
        .filter(|line| line.is_running())
        .map(|line| line.efficiency)
        .collect();
    mean(&running)
}

/// Number of lines currently running
#[must_use]
pub fn running_line_count(lines: &[ProductionLine]) -> usize {
    lines.iter().filter(|line| line.is_running()).count()
}

/// Total units produced across all lines
#[must_use]
pub fn total_output(lines: &[ProductionLine]) -> i64 {
    lines.iter().map(|line| line.output).sum()
}

/// Total revenue across the monthly series
#[must_use]
pub fn total_revenue(months: &[FiscalMonth]) -> i64 {
    months.iter().map(|month| month.revenue).sum()
}

/// Total expenses across the monthly series
#[must_use]
pub fn total_expenses(months: &[FiscalMonth]) -> i64 {
    months.iter().map(|month| month.expenses).sum()
}

/// Total profit across the monthly series
#[must_use]
pub fn total_profit(months: &[FiscalMonth]) -> i64 {
    months.iter().map(|month| month.profit).sum()
}

/// Period-over-period change, percent; `None` when the previous
/// value is zero
#[must_use]
pub fn percent_change(current: f64, previous: f64) -> Option<f64> {
    if previous == 0.0 {
        None
    } else {
        Some((current - previous) / previous * 100.0)
    }
}

/// Item counts per computed stock status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StockStatusCounts {
    /// Items at or above threshold
    pub in_stock: usize,
    /// Items below threshold with stock on hand
    pub low_stock: usize,
    /// Items with nothing on hand
    pub out_of_stock: usize,
}

/// Count items by their computed stock status
#[must_use]
pub fn stock_status_counts(items: &[InventoryItem]) -> StockStatusCounts {
    let mut counts = StockStatusCounts::default();
    for item in items {
        match item.stock_status() {
            StockStatus::InStock => counts.in_stock += 1,
            StockStatus::LowStock => counts.low_stock += 1,
            StockStatus::OutOfStock => counts.out_of_stock += 1,
        }
    }
    counts
}

/// Total valuation of the units on hand
#[must_use]
pub fn total_stock_value(items: &[InventoryItem]) -> f64 {
    items.iter().map(InventoryItem::stock_value).sum()
}
