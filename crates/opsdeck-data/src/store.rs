//! The seeded in-memory dataset store
//!
//! One immutable struct holds every dashboard collection. It is built
//! once at startup and shared behind an `Arc`; nothing mutates it, so
//! readers need no locking.

use crate::datasets::{
    analytics, customers, financial, hr, inventory, operations, overview, reports, settings,
};
use chrono::NaiveDate;
use opsdeck_core::types::{
    Customer, CustomerSegment, DepartmentPerformance, Employee, FiscalMonth, InventoryItem, Kpi,
    MonthlyUsers, OperationMetric, ProductionLine, RegionSales,
};

/// All dashboard datasets, seeded from the compiled-in literals
#[derive(Debug, Clone)]
#[allow(clippy::struct_field_names)]
pub struct DataStore {
    // Overview
    /// KPI cards
    pub kpis: Vec<Kpi>,
    /// Revenue/expense/profit series
    pub revenue_by_month: Vec<FiscalMonth>,
    /// Department performance scores
    pub department_performance: Vec<DepartmentPerformance>,
    /// Revenue by sales region
    pub sales_by_region: Vec<RegionSales>,
    /// Customer segment slices
    pub customer_segments: Vec<CustomerSegment>,
    /// Monthly active users series
    pub monthly_active_users: Vec<MonthlyUsers>,
    /// Operation metrics with targets
    pub operation_metrics: Vec<OperationMetric>,

    // Customers
    /// Customer account list
    pub customers: Vec<Customer>,
    /// Customer page card metrics
    pub customer_metrics: customers::CustomerMetrics,
    /// Won/lost accounts per month
    pub acquisition_trend: Vec<customers::AcquisitionMonth>,
    /// Revenue per customer segment
    pub revenue_by_segment: Vec<customers::SegmentRevenue>,
    /// Largest accounts
    pub top_customers: Vec<customers::TopCustomer>,

    // HR
    /// Employee roster
    pub employees: Vec<Employee>,
    /// HR page card metrics
    pub hr_metrics: hr::HrMetrics,
    /// Headcount per department
    pub department_breakdown: Vec<hr::DepartmentHeadcount>,
    /// Hires/departures per month
    pub hiring_trend: Vec<hr::HiringMonth>,
    /// Performance-rating distribution
    pub performance_distribution: Vec<hr::PerformanceBand>,
    /// Reviews coming due
    pub upcoming_reviews: Vec<hr::UpcomingReview>,
    /// Training programs
    pub training_programs: Vec<hr::TrainingProgram>,

    // Inventory
    /// Stocked items
    pub inventory: Vec<InventoryItem>,
    /// Inventory page card metrics
    pub inventory_metrics: inventory::InventoryMetrics,
    /// Supplier scorecards
    pub suppliers: Vec<inventory::Supplier>,
    /// Stock movement per month
    pub stock_movement: Vec<inventory::StockMovement>,
    /// Inventory per category
    pub category_breakdown: Vec<inventory::CategoryBreakdown>,
    /// Reorder alerts
    pub reorder_alerts: Vec<inventory::ReorderAlert>,

    // Operations
    /// Production lines
    pub production_lines: Vec<ProductionLine>,
    /// Intraday efficiency samples
    pub efficiency_trend: Vec<operations::EfficiencySample>,
    /// Floor alerts
    pub floor_alerts: Vec<operations::FloorAlert>,
    /// Quality metrics per month
    pub quality_metrics: Vec<operations::QualityMonth>,
    /// Resource utilization
    pub utilization: Vec<operations::UtilizationSlice>,

    // Financial
    /// Headline financial figures
    pub financial_kpis: financial::FinancialKpis,
    /// Expense distribution
    pub expense_breakdown: Vec<financial::ExpenseCategory>,
    /// Cash flow per month
    pub cash_flow: Vec<financial::CashFlowMonth>,
    /// Budget lines with actuals
    pub budget_vs_actual: Vec<financial::BudgetLine>,
    /// Outstanding receivables
    pub receivables: Vec<financial::Receivable>,
    /// Standard ratio set
    pub financial_ratios: financial::FinancialRatios,
    /// Date the books were last closed
    pub books_closed: NaiveDate,

    // Reports
    /// Report templates
    pub report_templates: Vec<reports::ReportTemplate>,
    /// Recently generated reports
    pub recent_reports: Vec<reports::GeneratedReport>,
    /// Compliance report rows
    pub compliance_reports: Vec<reports::ComplianceReport>,
    /// Scheduled report runs
    pub scheduled_reports: Vec<reports::ScheduledReport>,

    // Analytics
    /// Engagement per month
    pub engagement: Vec<analytics::EngagementMonth>,
    /// Conversion funnel stages
    pub conversion_funnel: Vec<analytics::FunnelStage>,
    /// Traffic source split
    pub traffic_sources: Vec<analytics::TrafficSource>,
    /// Current site metrics
    pub realtime_metrics: analytics::RealtimeMetrics,
    /// Most-viewed pages
    pub top_pages: Vec<analytics::PageStat>,
    /// Device class split
    pub device_breakdown: Vec<analytics::DeviceShare>,

    // Settings
    /// Workspace profile
    pub profile: settings::WorkspaceProfile,
    /// Notification defaults
    pub notifications: settings::NotificationSettings,
    /// Display preferences
    pub preferences: settings::Preferences,
    /// Configured integrations
    pub integrations: Vec<settings::Integration>,
    /// Security posture
    pub security: settings::SecurityOverview,
    /// Recent logins
    pub login_history: Vec<settings::LoginRecord>,
    /// Team members with access
    pub team_members: Vec<settings::TeamMember>,
}

impl DataStore {
    /// Build the store from the compiled-in datasets
    #[must_use]
    pub fn seed() -> Self {
        Self {
            kpis: overview::kpis(),
            revenue_by_month: overview::revenue_by_month(),
            department_performance: overview::department_performance(),
            sales_by_region: overview::sales_by_region(),
            customer_segments: overview::customer_segments(),
            monthly_active_users: overview::monthly_active_users(),
            operation_metrics: overview::operation_metrics(),

            customers: customers::customers(),
            customer_metrics: customers::customer_metrics(),
            acquisition_trend: customers::acquisition_trend(),
            revenue_by_segment: customers::revenue_by_segment(),
            top_customers: customers::top_customers(),

            employees: hr::employees(),
            hr_metrics: hr::hr_metrics(),
            department_breakdown: hr::department_breakdown(),
            hiring_trend: hr::hiring_trend(),
            performance_distribution: hr::performance_distribution(),
            upcoming_reviews: hr::upcoming_reviews(),
            training_programs: hr::training_programs(),

            inventory: inventory::inventory_items(),
            inventory_metrics: inventory::inventory_metrics(),
            suppliers: inventory::suppliers(),
            stock_movement: inventory::stock_movement(),
            category_breakdown: inventory::category_breakdown(),
            reorder_alerts: inventory::reorder_alerts(),

            production_lines: operations::production_lines(),
            efficiency_trend: operations::efficiency_trend(),
            floor_alerts: operations::floor_alerts(),
            quality_metrics: operations::quality_metrics(),
            utilization: operations::utilization(),

            financial_kpis: financial::financial_kpis(),
            expense_breakdown: financial::expense_breakdown(),
            cash_flow: financial::cash_flow(),
            budget_vs_actual: financial::budget_vs_actual(),
            receivables: financial::receivables(),
            financial_ratios: financial::financial_ratios(),
            books_closed: financial::last_closed(),

            report_templates: reports::templates(),
            recent_reports: reports::recent_reports(),
            compliance_reports: reports::compliance_reports(),
            scheduled_reports: reports::scheduled_reports(),

            engagement: analytics::engagement(),
            conversion_funnel: analytics::conversion_funnel(),
            traffic_sources: analytics::traffic_sources(),
            realtime_metrics: analytics::realtime_metrics(),
            top_pages: analytics::top_pages(),
            device_breakdown: analytics::device_breakdown(),

            profile: settings::profile(),
            notifications: settings::notifications(),
            preferences: settings::preferences(),
            integrations: settings::integrations(),
            security: settings::security(),
            login_history: settings::login_history(),
            team_members: settings::team_members(),
        }
    }

    /// Departments present in the employee roster, in roster order,
    /// deduplicated (drives the department filter dropdown)
    #[must_use]
    pub fn departments(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for employee in &self.employees {
            if !seen.contains(&employee.department) {
                seen.push(employee.department.clone());
            }
        }
        seen
    }

    /// Item categories present in inventory, in dataset order,
    /// deduplicated (drives the category filter dropdown)
    #[must_use]
    pub fn inventory_categories(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for item in &self.inventory {
            if !seen.contains(&item.category) {
                seen.push(item.category.clone());
            }
        }
        seen
    }
}

impl Default for DataStore {
    fn default() -> Self {
        Self::seed()
    }
}
