//! Dashboard result models.
//!
//! One struct per view; field names serialize to the wire names the
//! existing front-ends consume.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::expenses::{CategoryBreakdown, Expense};
use crate::incomes::{Income, SourceBreakdown};
use crate::users::UserLimits;

/// Totals and goal percentages for a single calendar month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthSummary {
    pub expenses: Decimal,
    pub incomes: Decimal,
    /// Expenses as a share of the monthly limit; zero when no limit is set.
    pub expenses_percent: Decimal,
    /// Incomes as a share of the savings goal; zero when no goal is set.
    pub savings_percent: Decimal,
    pub balance: Decimal,
}

/// Totals over the full recorded history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllTimeSummary {
    pub expenses: Decimal,
    pub incomes: Decimal,
    pub balance: Decimal,
}

/// The landing-page dashboard view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub user: UserLimits,
    pub current_month: MonthSummary,
    pub all_time: AllTimeSummary,
    pub expenses_by_category: CategoryBreakdown,
    pub incomes_by_source: SourceBreakdown,
    pub recent_expenses: Vec<Expense>,
    pub recent_incomes: Vec<Income>,
}

/// Resolved calendar-month window of a monthly statistics view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthPeriod {
    pub year: i32,
    pub month: u32,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
}

/// Statistics for one specific calendar month, with the full record lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyStats {
    pub period: MonthPeriod,
    pub summary: MonthSummary,
    pub expenses_by_category: CategoryBreakdown,
    pub incomes_by_source: SourceBreakdown,
    pub expenses: Vec<Expense>,
    pub incomes: Vec<Income>,
}

/// Resolved calendar-year window of a yearly statistics view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearPeriod {
    pub year: i32,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
}

/// Per-month averages over a year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AverageMonth {
    pub expenses: Decimal,
    pub incomes: Decimal,
}

/// Year totals with per-month averages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearSummary {
    pub expenses: Decimal,
    pub incomes: Decimal,
    pub balance: Decimal,
    pub avg_month: AverageMonth,
}

/// Totals for one month of a yearly view.
///
/// A month whose underlying query failed reports zeros rather than failing
/// the whole year view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthTotals {
    pub month: u32,
    pub month_name: String,
    pub expenses: Decimal,
    pub incomes: Decimal,
    pub balance: Decimal,
}

/// Statistics for one calendar year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearlyStats {
    pub period: YearPeriod,
    pub summary: YearSummary,
    pub expenses_by_category: CategoryBreakdown,
    pub incomes_by_source: SourceBreakdown,
    pub monthly_data: Vec<MonthTotals>,
}
