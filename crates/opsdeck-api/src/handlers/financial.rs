//! Financial page endpoint

use crate::state::AppState;
use axum::{extract::State, response::Json};
use chrono::NaiveDate;
use opsdeck_core::types::FiscalMonth;
use opsdeck_data::datasets::financial::{
    BudgetLine, CashFlowMonth, ExpenseCategory, FinancialKpis, FinancialRatios, Receivable,
};
use serde::Serialize;
use std::sync::Arc;

/// A budget line with its derived variance
#[derive(Debug, Serialize)]
pub struct BudgetLineSummary {
    /// The budget line
    #[serde(flatten)]
    pub line: BudgetLine,

    /// `actual - budget`; positive means over budget
    pub variance: i64,
}

/// Financial page payload
#[derive(Debug, Serialize)]
pub struct FinancialResponse {
    /// Headline figures
    pub kpis: FinancialKpis,

    /// Revenue/expense/profit series
    pub revenue_by_month: Vec<FiscalMonth>,

    /// Expense distribution
    pub expense_breakdown: Vec<ExpenseCategory>,

    /// Cash flow per month
    pub cash_flow: Vec<CashFlowMonth>,

    /// Budget lines with derived variances
    pub budget_vs_actual: Vec<BudgetLineSummary>,

    /// Outstanding receivables
    pub receivables: Vec<Receivable>,

    /// Standard ratio set
    pub ratios: FinancialRatios,

    /// Date the books were last closed
    pub as_of: NaiveDate,
}

/// Financial page data
///
/// Budget variances are derived from the budget and actual figures on
/// read rather than stored alongside them.
pub async fn get_financial(State(state): State<Arc<AppState>>) -> Json<FinancialResponse> {
    let store = &state.store;

    let budget_vs_actual = store
        .budget_vs_actual
        .iter()
        .map(|line| BudgetLineSummary {
            variance: line.variance(),
            line: line.clone(),
        })
        .collect();

    Json(FinancialResponse {
        kpis: store.financial_kpis.clone(),
        revenue_by_month: store.revenue_by_month.clone(),
        expense_breakdown: store.expense_breakdown.clone(),
        cash_flow: store.cash_flow.clone(),
        budget_vs_actual,
        receivables: store.receivables.clone(),
        ratios: store.financial_ratios.clone(),
        as_of: store.books_closed,
    })
}
