//! Core domain types for the Opsdeck dashboard

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Entity identifier type
pub type EntityId = String;

/// Employment status enumeration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum EmployeeStatus {
    /// Currently employed and working
    Active,
    /// No longer active
    Inactive,
    /// Temporarily away
    OnLeave,
}

impl std::fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Inactive => write!(f, "inactive"),
            Self::OnLeave => write!(f, "on-leave"),
        }
    }
}

impl std::str::FromStr for EmployeeStatus {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            "on-leave" => Ok(Self::OnLeave),
            other => Err(crate::Error::Validation {
                field: "status".to_string(),
                message: format!("unknown employee status: {other}"),
            }),
        }
    }
}

/// Customer relationship status enumeration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum CustomerStatus {
    /// Paying customer with an active relationship
    Active,
    /// Lapsed customer
    Inactive,
    /// Potential customer in the pipeline
    Prospect,
}

impl std::fmt::Display for CustomerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Inactive => write!(f, "inactive"),
            Self::Prospect => write!(f, "prospect"),
        }
    }
}

impl std::str::FromStr for CustomerStatus {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            "prospect" => Ok(Self::Prospect),
            other => Err(crate::Error::Validation {
                field: "status".to_string(),
                message: format!("unknown customer status: {other}"),
            }),
        }
    }
}

/// Stock availability, derived from the numeric stock levels.
///
/// This is never stored on an item; it is computed from `stock` and
/// `min_stock` so the badge can never disagree with the counts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    /// Stock at or above the reorder threshold
    InStock,
    /// Stock below the reorder threshold but not exhausted
    LowStock,
    /// Nothing on hand
    OutOfStock,
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InStock => write!(f, "in-stock"),
            Self::LowStock => write!(f, "low-stock"),
            Self::OutOfStock => write!(f, "out-of-stock"),
        }
    }
}

impl std::str::FromStr for StockStatus {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in-stock" => Ok(Self::InStock),
            "low-stock" => Ok(Self::LowStock),
            "out-of-stock" => Ok(Self::OutOfStock),
            other => Err(crate::Error::Validation {
                field: "status".to_string(),
                message: format!("unknown stock status: {other}"),
            }),
        }
    }
}

/// Standing of an operation metric against its target.
///
/// Stored rather than derived: whether a deviation from target is good
/// or bad depends on the metric's direction (a fulfillment time above
/// target is behind, a satisfaction score above target is exceeded),
/// and the numeric fields do not encode that direction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum MetricStanding {
    /// Within tolerance of the target
    OnTrack,
    /// Worse than target
    Behind,
    /// Better than target
    Exceeded,
}

impl std::fmt::Display for MetricStanding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OnTrack => write!(f, "on-track"),
            Self::Behind => write!(f, "behind"),
            Self::Exceeded => write!(f, "exceeded"),
        }
    }
}

/// Production line run state
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LineStatus {
    /// Producing
    Running,
    /// Down for scheduled maintenance
    Maintenance,
    /// Halted
    Stopped,
}

impl std::fmt::Display for LineStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Running => write!(f, "running"),
            Self::Maintenance => write!(f, "maintenance"),
            Self::Stopped => write!(f, "stopped"),
        }
    }
}

/// Direction of a period-over-period change on a KPI card
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ChangeDirection {
    /// Metric moved up
    Increase,
    /// Metric moved down
    Decrease,
}

/// An employee record
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Employee {
    /// Unique identifier
    pub id: EntityId,

    /// Full name
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    /// Work email address
    #[validate(email, length(max = 255))]
    pub email: String,

    /// Department the employee belongs to
    #[validate(length(min = 1, max = 100))]
    pub department: String,

    /// Job title
    #[validate(length(min = 1, max = 100))]
    pub position: String,

    /// Employment status
    pub status: EmployeeStatus,

    /// First day of employment
    pub join_date: NaiveDate,

    /// Annual salary in whole dollars
    pub salary: i64,
}

/// A customer account record
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Customer {
    /// Unique identifier
    pub id: EntityId,

    /// Account display name
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    /// Primary contact email
    #[validate(email, length(max = 255))]
    pub email: String,

    /// Company the account belongs to
    #[validate(length(min = 1, max = 255))]
    pub company: String,

    /// Relationship status
    pub status: CustomerStatus,

    /// Annual account value in whole dollars
    pub value: i64,

    /// Date of the most recent contact
    pub last_contact: NaiveDate,
}

/// A stocked inventory item
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct InventoryItem {
    /// Unique identifier
    pub id: EntityId,

    /// Item display name
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    /// Item category
    #[validate(length(min = 1, max = 100))]
    pub category: String,

    /// Units currently on hand
    pub stock: i64,

    /// Reorder threshold
    pub min_stock: i64,

    /// Unit price in dollars
    pub price: f64,

    /// Supplier name
    #[validate(length(max = 255))]
    pub supplier: String,

    /// Date the stock count was last updated
    pub last_updated: NaiveDate,
}

impl InventoryItem {
    /// Stock status derived from the numeric levels.
    ///
    /// An exhausted item is out of stock regardless of its threshold;
    /// anything on hand below `min_stock` is low.
    #[must_use]
    pub const fn stock_status(&self) -> StockStatus {
        if self.stock <= 0 {
            StockStatus::OutOfStock
        } else if self.stock < self.min_stock {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    /// Total value of the units on hand
    #[must_use]
    pub fn stock_value(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let units = self.stock.max(0) as f64;
        units * self.price
    }
}

/// An operational KPI measured against a target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationMetric {
    /// Unique identifier
    pub id: EntityId,

    /// Metric display name
    pub name: String,

    /// Target value
    pub target: f64,

    /// Measured value
    pub actual: f64,

    /// Unit of measure ("%" or "hours")
    pub unit: String,

    /// Standing against the target
    pub status: MetricStanding,
}

/// A production line on the operations floor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionLine {
    /// Line identifier (e.g. "LINE-001")
    pub id: EntityId,

    /// Line display name
    pub name: String,

    /// Run state
    pub status: LineStatus,

    /// Efficiency percentage; zero while not running
    pub efficiency: f64,

    /// Units produced this period
    pub output: i64,

    /// Unit target for this period
    pub target: i64,

    /// Date of the most recent maintenance
    pub last_maintenance: NaiveDate,
}

impl ProductionLine {
    /// Whether the line is currently producing
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status == LineStatus::Running
    }
}

/// A KPI card on the dashboard overview
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Kpi {
    /// Unique identifier
    pub id: EntityId,

    /// Card title
    pub title: String,

    /// Pre-formatted display value (e.g. "$2.4M", "94.2%")
    pub value: String,

    /// Percent change from the previous period
    pub change: f64,

    /// Direction of the change
    pub change_direction: ChangeDirection,

    /// Supporting description line
    pub description: String,
}

/// One month of the revenue/expense/profit series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FiscalMonth {
    /// Month label ("Jan".."Dec")
    pub month: String,

    /// Revenue in whole dollars
    pub revenue: i64,

    /// Expenses in whole dollars
    pub expenses: i64,

    /// Profit in whole dollars
    pub profit: i64,
}

/// Per-department performance scores
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentPerformance {
    /// Department name
    pub department: String,

    /// Efficiency score
    pub efficiency: f64,

    /// Satisfaction score
    pub satisfaction: f64,

    /// Productivity score
    pub productivity: f64,
}

/// Revenue attributed to a sales region
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionSales {
    /// Region name
    pub region: String,

    /// Revenue in whole dollars
    pub revenue: i64,

    /// Share of global revenue, percent
    pub share: f64,
}

/// A customer segment slice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerSegment {
    /// Segment name
    pub segment: String,

    /// Share of revenue, percent
    pub share: f64,

    /// Number of customers in the segment
    pub customers: i64,
}

/// One month of the active-users series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyUsers {
    /// Month label
    pub month: String,

    /// Active user count
    pub users: i64,
}

#[cfg(test)]
#[allow(
    clippy::missing_panics_doc,
    clippy::unwrap_used,
    clippy::float_cmp,
    clippy::unreadable_literal
)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn item(stock: i64, min_stock: i64) -> InventoryItem {
        InventoryItem {
            id: "1".to_string(),
            name: "Wireless Headphones".to_string(),
            category: "Electronics".to_string(),
            stock,
            min_stock,
            price: 99.99,
            supplier: "AudioTech Corp".to_string(),
            last_updated: date(2024, 1, 15),
        }
    }

    #[test]
    fn test_stock_status_in_stock() {
        assert_eq!(item(150, 50).stock_status(), StockStatus::InStock);
    }

    #[test]
    fn test_stock_status_low_stock() {
        assert_eq!(item(25, 30).stock_status(), StockStatus::LowStock);
    }

    #[test]
    fn test_stock_status_out_of_stock() {
        assert_eq!(item(0, 20).stock_status(), StockStatus::OutOfStock);
    }

    #[test]
    fn test_stock_status_at_threshold_counts_as_in_stock() {
        assert_eq!(item(30, 30).stock_status(), StockStatus::InStock);
    }

    #[test]
    fn test_stock_value() {
        assert_eq!(item(10, 5).stock_value(), 10.0 * 99.99);
        assert_eq!(item(0, 5).stock_value(), 0.0);
    }

    #[test]
    fn test_employee_status_display() {
        assert_eq!(format!("{}", EmployeeStatus::Active), "active");
        assert_eq!(format!("{}", EmployeeStatus::OnLeave), "on-leave");
        assert_eq!(format!("{}", EmployeeStatus::Inactive), "inactive");
    }

    #[test]
    fn test_status_wire_names_are_kebab_case() {
        let serialized = serde_json::to_string(&StockStatus::OutOfStock).unwrap();
        assert_eq!(serialized, "\"out-of-stock\"");

        let serialized = serde_json::to_string(&EmployeeStatus::OnLeave).unwrap();
        assert_eq!(serialized, "\"on-leave\"");

        let serialized = serde_json::to_string(&MetricStanding::OnTrack).unwrap();
        assert_eq!(serialized, "\"on-track\"");
    }

    #[test]
    fn test_customer_status_from_str() {
        assert_eq!(
            CustomerStatus::from_str("prospect").unwrap(),
            CustomerStatus::Prospect
        );
        assert!(CustomerStatus::from_str("vip").is_err());
    }

    #[test]
    fn test_stock_status_from_str_rejects_unknown() {
        assert!(StockStatus::from_str("backordered").is_err());
        assert_eq!(
            StockStatus::from_str("low-stock").unwrap(),
            StockStatus::LowStock
        );
    }

    #[test]
    fn test_employee_validation() {
        let employee = Employee {
            id: "1".to_string(),
            name: "Sarah Johnson".to_string(),
            email: "sarah.johnson@company.com".to_string(),
            department: "Engineering".to_string(),
            position: "Senior Developer".to_string(),
            status: EmployeeStatus::Active,
            join_date: date(2022, 3, 15),
            salary: 95_000,
        };
        assert!(employee.validate().is_ok());

        let mut bad = employee;
        bad.email = "not-an-email".to_string();
        let errors = bad.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_customer_validation_rejects_empty_name() {
        let customer = Customer {
            id: "1".to_string(),
            name: String::new(),
            email: "contact@techsolutions.com".to_string(),
            company: "Tech Solutions Inc.".to_string(),
            status: CustomerStatus::Active,
            value: 125_000,
            last_contact: date(2024, 1, 15),
        };
        let errors = customer.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_production_line_is_running() {
        let line = ProductionLine {
            id: "LINE-001".to_string(),
            name: "Assembly Line A".to_string(),
            status: LineStatus::Running,
            efficiency: 94.2,
            output: 1247,
            target: 1300,
            last_maintenance: date(2024, 1, 10),
        };
        assert!(line.is_running());

        let mut down = line;
        down.status = LineStatus::Maintenance;
        assert!(!down.is_running());
    }

    #[test]
    fn test_customer_serialization_roundtrip() {
        let customer = Customer {
            id: "4".to_string(),
            name: "Healthcare Systems".to_string(),
            email: "purchasing@healthsys.com".to_string(),
            company: "Healthcare Systems".to_string(),
            status: CustomerStatus::Active,
            value: 200_000,
            last_contact: date(2024, 1, 12),
        };

        let serialized = serde_json::to_string(&customer).unwrap();
        let deserialized: Customer = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized.name, customer.name);
        assert_eq!(deserialized.status, customer.status);
        assert_eq!(deserialized.value, customer.value);
        assert_eq!(deserialized.last_contact, customer.last_contact);
    }

    proptest! {
        #[test]
        fn test_stock_status_never_disagrees_with_levels(
            stock in 0i64..10_000,
            min_stock in 0i64..10_000,
        ) {
            let status = item(stock, min_stock).stock_status();
            match status {
                StockStatus::OutOfStock => prop_assert_eq!(stock, 0),
                StockStatus::LowStock => prop_assert!(stock > 0 && stock < min_stock),
                StockStatus::InStock => prop_assert!(stock > 0 && stock >= min_stock),
            }
        }

        #[test]
        fn test_metric_standing_roundtrip(standing in prop_oneof![
            Just(MetricStanding::OnTrack),
            Just(MetricStanding::Behind),
            Just(MetricStanding::Exceeded),
        ]) {
            let serialized = serde_json::to_string(&standing).unwrap();
            let deserialized: MetricStanding = serde_json::from_str(&serialized).unwrap();
            prop_assert_eq!(standing, deserialized);
        }
    }
}
