//! Dashboard aggregation errors.

use std::fmt;

use thiserror::Error;

/// Identifies which dashboard sub-query failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryQuery {
    ExpenseTotal,
    IncomeTotal,
    AllTimeExpenseTotal,
    AllTimeIncomeTotal,
    ExpensesByCategory,
    IncomesBySource,
    ExpenseRecords,
    IncomeRecords,
    RecentExpenses,
    RecentIncomes,
}

impl fmt::Display for SummaryQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SummaryQuery::ExpenseTotal => "expense total",
            SummaryQuery::IncomeTotal => "income total",
            SummaryQuery::AllTimeExpenseTotal => "all-time expense total",
            SummaryQuery::AllTimeIncomeTotal => "all-time income total",
            SummaryQuery::ExpensesByCategory => "expenses by category",
            SummaryQuery::IncomesBySource => "incomes by source",
            SummaryQuery::ExpenseRecords => "expense records",
            SummaryQuery::IncomeRecords => "income records",
            SummaryQuery::RecentExpenses => "recent expenses",
            SummaryQuery::RecentIncomes => "recent incomes",
        };
        write!(f, "{name}")
    }
}

/// A required dashboard sub-query failed.
///
/// The source error is carried in string form to keep this type
/// database-agnostic; the tag names the sub-query so callers can report
/// which part of the view could not be built.
#[derive(Error, Debug)]
#[error("{query} query failed: {message}")]
pub struct AggregationError {
    pub query: SummaryQuery,
    pub message: String,
}
