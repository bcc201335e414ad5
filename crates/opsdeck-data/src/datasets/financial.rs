//! Financial page datasets: KPIs, expense and cash-flow series,
//! budget lines, receivables, and ratios

use super::date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Headline financial figures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialKpis {
    /// Total revenue in dollars
    pub total_revenue: i64,
    /// Total expenses in dollars
    pub total_expenses: i64,
    /// Net profit in dollars
    pub net_profit: i64,
    /// Net cash flow in dollars
    pub cash_flow: i64,
    /// Profit margin, percent
    pub profit_margin: f64,
    /// Revenue growth, percent
    pub revenue_growth: f64,
}

/// Expenses attributed to one category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseCategory {
    /// Category name
    pub category: String,
    /// Amount in dollars
    pub amount: i64,
    /// Share of total expenses, percent
    pub share: f64,
}

/// One month of cash-flow figures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashFlowMonth {
    /// Month label
    pub month: String,
    /// Operating cash flow
    pub operating: i64,
    /// Investing cash flow
    pub investing: i64,
    /// Financing cash flow
    pub financing: i64,
    /// Net cash flow
    pub net: i64,
}

/// A budget line with its actual spend.
///
/// The variance is derived (`actual - budget`) rather than stored, so
/// it can never drift out of sync with the figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetLine {
    /// Budget category
    pub category: String,
    /// Budgeted amount in dollars
    pub budget: i64,
    /// Actual amount in dollars
    pub actual: i64,
}

impl BudgetLine {
    /// Variance against budget; positive means over budget
    #[must_use]
    pub const fn variance(&self) -> i64 {
        self.actual - self.budget
    }
}

/// Collection state of a receivable
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ReceivableStatus {
    /// Within payment terms
    Current,
    /// Past payment terms
    Overdue,
}

/// An outstanding receivable
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receivable {
    /// Customer name
    pub customer: String,
    /// Amount outstanding in dollars
    pub amount: i64,
    /// Days since invoicing
    pub days_outstanding: i64,
    /// Collection state
    pub status: ReceivableStatus,
}

/// Standard financial ratios
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialRatios {
    /// Current assets over current liabilities
    pub current_ratio: f64,
    /// Quick assets over current liabilities
    pub quick_ratio: f64,
    /// Total debt over equity
    pub debt_to_equity: f64,
    /// Return on assets, percent
    pub return_on_assets: f64,
    /// Return on equity, percent
    pub return_on_equity: f64,
    /// Gross margin, percent
    pub gross_margin: f64,
}

/// Headline figures for the financial page
#[must_use]
pub const fn financial_kpis() -> FinancialKpis {
    FinancialKpis {
        total_revenue: 2_400_000,
        total_expenses: 1_680_000,
        net_profit: 720_000,
        cash_flow: 450_000,
        profit_margin: 30.0,
        revenue_growth: 12.5,
    }
}

/// Expense distribution across categories
#[must_use]
pub fn expense_breakdown() -> Vec<ExpenseCategory> {
    let rows = [
        ("Personnel", 672_000, 40.0),
        ("Operations", 420_000, 25.0),
        ("Marketing", 252_000, 15.0),
        ("Technology", 168_000, 10.0),
        ("Facilities", 100_800, 6.0),
        ("Other", 67_200, 4.0),
    ];

    rows.into_iter()
        .map(|(category, amount, share)| ExpenseCategory {
            category: category.to_string(),
            amount,
            share,
        })
        .collect()
}

/// Six months of cash-flow figures
#[must_use]
pub fn cash_flow() -> Vec<CashFlowMonth> {
    let rows = [
        ("Jan", 45_000, -12_000, 8_000, 41_000),
        ("Feb", 52_000, -8_000, 5_000, 49_000),
        ("Mar", 48_000, -15_000, 12_000, 45_000),
        ("Apr", 58_000, -10_000, 7_000, 55_000),
        ("May", 62_000, -18_000, 15_000, 59_000),
        ("Jun", 67_000, -22_000, 10_000, 55_000),
    ];

    rows.into_iter()
        .map(|(month, operating, investing, financing, net)| CashFlowMonth {
            month: month.to_string(),
            operating,
            investing,
            financing,
            net,
        })
        .collect()
}

/// Budget lines with actual spend
#[must_use]
pub fn budget_vs_actual() -> Vec<BudgetLine> {
    let rows = [
        ("Revenue", 2_200_000, 2_400_000),
        ("Cost of Goods", 1_100_000, 1_050_000),
        ("Personnel", 650_000, 672_000),
        ("Marketing", 280_000, 252_000),
        ("Operations", 400_000, 420_000),
        ("Technology", 150_000, 168_000),
    ];

    rows.into_iter()
        .map(|(category, budget, actual)| BudgetLine {
            category: category.to_string(),
            budget,
            actual,
        })
        .collect()
}

/// Outstanding receivables
#[must_use]
pub fn receivables() -> Vec<Receivable> {
    let rows = [
        ("TechCorp Inc.", 125_000, 28, ReceivableStatus::Current),
        ("Global Solutions", 89_000, 35, ReceivableStatus::Current),
        ("Innovate Co.", 67_000, 47, ReceivableStatus::Overdue),
        ("Future Systems", 54_000, 62, ReceivableStatus::Overdue),
        ("Dynamic Corp", 43_000, 15, ReceivableStatus::Current),
    ];

    rows.into_iter()
        .map(|(customer, amount, days_outstanding, status)| Receivable {
            customer: customer.to_string(),
            amount,
            days_outstanding,
            status,
        })
        .collect()
}

/// Standard ratio set
#[must_use]
pub const fn financial_ratios() -> FinancialRatios {
    FinancialRatios {
        current_ratio: 2.4,
        quick_ratio: 1.8,
        debt_to_equity: 0.3,
        return_on_assets: 15.2,
        return_on_equity: 22.1,
        gross_margin: 56.2,
    }
}

/// Date the books were last closed (shown on the page footer)
#[must_use]
pub fn last_closed() -> NaiveDate {
    date(2024, 1, 15)
}
