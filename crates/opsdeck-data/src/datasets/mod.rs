//! Compiled-in datasets for every dashboard page
//!
//! Field names and value shapes are preserved from the original
//! presentation layer so the payloads remain drop-in for it. Each
//! submodule owns the row types and seed data for one page; the
//! shared entity types live in `opsdeck_core::types`.

pub mod analytics;
pub mod customers;
pub mod financial;
pub mod hr;
pub mod inventory;
pub mod operations;
pub mod overview;
pub mod reports;
pub mod settings;

use chrono::NaiveDate;

/// Calendar date literal for seeded rows.
#[allow(clippy::expect_used)]
pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seeded dates are valid calendar dates")
}
