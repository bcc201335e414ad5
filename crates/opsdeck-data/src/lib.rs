//! In-memory datasets and query layer for the Opsdeck dashboard
//!
//! This crate owns the compiled-in datasets behind every dashboard
//! page, the filter/search layer that produces filtered views of
//! them, and the pure aggregate functions that derive card and chart
//! values. The store is immutable after seeding; nothing here does
//! I/O.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod aggregate;
pub mod datasets;
pub mod query;
pub mod store;

// Re-export commonly used types
pub use query::{CustomerFilter, EmployeeFilter, InventoryFilter, ReportFilter};
pub use store::DataStore;

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;

    #[test]
    fn test_store_seeds_every_collection() {
        let store = DataStore::seed();

        assert!(!store.kpis.is_empty());
        assert!(!store.customers.is_empty());
        assert!(!store.employees.is_empty());
        assert!(!store.inventory.is_empty());
        assert!(!store.production_lines.is_empty());
        assert!(!store.operation_metrics.is_empty());
        assert!(!store.revenue_by_month.is_empty());
        assert!(!store.report_templates.is_empty());
    }

    #[test]
    fn test_module_structure() {
        // Compile-time check that the public modules stay reachable
        let _store = std::any::type_name::<store::DataStore>();
        let _filter = std::any::type_name::<query::CustomerFilter<'_>>();
    }
}
