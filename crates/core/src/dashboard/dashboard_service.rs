use std::sync::Arc;

use chrono::NaiveDateTime;
use futures::future::try_join_all;
use futures::{try_join, TryFutureExt};
use log::{debug, error};
use num_traits::Zero;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::dashboard_errors::{AggregationError, SummaryQuery};
use super::dashboard_model::{
    AllTimeSummary, AverageMonth, DashboardSummary, MonthPeriod, MonthSummary, MonthTotals,
    MonthlyStats, YearPeriod, YearSummary, YearlyStats,
};
use super::dashboard_traits::DashboardServiceTrait;
use crate::constants::{DEFAULT_RECENT_LIMIT, MONTHS_PER_YEAR};
use crate::errors::{Error, Result};
use crate::expenses::ExpenseRepositoryTrait;
use crate::incomes::IncomeRepositoryTrait;
use crate::users::{UserLimits, UserRepositoryTrait};
use crate::utils::time_utils::{now_utc, Period};

/// Composes ledger and profile queries into dashboard views.
pub struct DashboardService {
    expense_repository: Arc<dyn ExpenseRepositoryTrait>,
    income_repository: Arc<dyn IncomeRepositoryTrait>,
    user_repository: Arc<dyn UserRepositoryTrait>,
}

impl DashboardService {
    pub fn new(
        expense_repository: Arc<dyn ExpenseRepositoryTrait>,
        income_repository: Arc<dyn IncomeRepositoryTrait>,
        user_repository: Arc<dyn UserRepositoryTrait>,
    ) -> Self {
        DashboardService {
            expense_repository,
            income_repository,
            user_repository,
        }
    }

    /// Summary composition against an explicit clock, so tests can pin the
    /// current month.
    pub(crate) async fn get_summary_at(
        &self,
        user_id: i64,
        recent_limit: Option<u32>,
        now: NaiveDateTime,
    ) -> Result<DashboardSummary> {
        debug!("Building dashboard summary for user {user_id}");

        // Missing user surfaces as NotFound, not as an aggregation failure.
        let limits = self.user_repository.get_user_limits(user_id).await?;

        let current_month = Period::month_of(now);
        let all_time = Period::all_time_until(now);
        let limit = recent_limit.unwrap_or(DEFAULT_RECENT_LIMIT);

        let (
            current_month_expenses,
            current_month_incomes,
            all_time_expenses,
            all_time_incomes,
            expenses_by_category,
            incomes_by_source,
            recent_expenses,
            recent_incomes,
        ) = try_join!(
            self.expense_repository
                .total_in_period(user_id, &current_month)
                .map_err(tag_query(SummaryQuery::ExpenseTotal)),
            self.income_repository
                .total_in_period(user_id, &current_month)
                .map_err(tag_query(SummaryQuery::IncomeTotal)),
            self.expense_repository
                .total_in_period(user_id, &all_time)
                .map_err(tag_query(SummaryQuery::AllTimeExpenseTotal)),
            self.income_repository
                .total_in_period(user_id, &all_time)
                .map_err(tag_query(SummaryQuery::AllTimeIncomeTotal)),
            self.expense_repository
                .totals_by_category(user_id, &current_month)
                .map_err(tag_query(SummaryQuery::ExpensesByCategory)),
            self.income_repository
                .totals_by_source(user_id, &current_month)
                .map_err(tag_query(SummaryQuery::IncomesBySource)),
            self.expense_repository
                .list_recent(user_id, limit)
                .map_err(tag_query(SummaryQuery::RecentExpenses)),
            self.income_repository
                .list_recent(user_id, limit)
                .map_err(tag_query(SummaryQuery::RecentIncomes)),
        )?;

        Ok(DashboardSummary {
            user: limits,
            current_month: month_summary(current_month_expenses, current_month_incomes, &limits),
            all_time: AllTimeSummary {
                expenses: all_time_expenses,
                incomes: all_time_incomes,
                balance: all_time_incomes - all_time_expenses,
            },
            expenses_by_category,
            incomes_by_source,
            recent_expenses,
            recent_incomes,
        })
    }

    /// Totals for one month of a yearly view.
    ///
    /// A failed totals query degrades to zero so the year view stays
    /// renderable; cancellation still aborts the whole call.
    async fn month_totals(&self, user_id: i64, year: i32, month: u32) -> Result<MonthTotals> {
        let period = Period::month(year, month)?;

        let expenses = match self
            .expense_repository
            .total_in_period(user_id, &period)
            .await
        {
            Ok(total) => total,
            Err(Error::Cancelled) => return Err(Error::Cancelled),
            Err(err) => {
                error!("Expense total for {year}-{month:02} failed, reporting zero: {err}");
                Decimal::zero()
            }
        };
        let incomes = match self
            .income_repository
            .total_in_period(user_id, &period)
            .await
        {
            Ok(total) => total,
            Err(Error::Cancelled) => return Err(Error::Cancelled),
            Err(err) => {
                error!("Income total for {year}-{month:02} failed, reporting zero: {err}");
                Decimal::zero()
            }
        };

        Ok(MonthTotals {
            month,
            month_name: period.month_name(),
            expenses,
            incomes,
            balance: incomes - expenses,
        })
    }
}

#[async_trait::async_trait]
impl DashboardServiceTrait for DashboardService {
    async fn get_summary(
        &self,
        user_id: i64,
        recent_limit: Option<u32>,
    ) -> Result<DashboardSummary> {
        self.get_summary_at(user_id, recent_limit, now_utc()).await
    }

    async fn get_monthly_stats(
        &self,
        user_id: i64,
        year: i32,
        month: u32,
    ) -> Result<MonthlyStats> {
        debug!("Building monthly stats for user {user_id}, {year}-{month:02}");

        let period = Period::month(year, month)?;
        let limits = self.user_repository.get_user_limits(user_id).await?;

        let (expenses_total, incomes_total, expenses, incomes, expenses_by_category, incomes_by_source) = try_join!(
            self.expense_repository
                .total_in_period(user_id, &period)
                .map_err(tag_query(SummaryQuery::ExpenseTotal)),
            self.income_repository
                .total_in_period(user_id, &period)
                .map_err(tag_query(SummaryQuery::IncomeTotal)),
            self.expense_repository
                .list_in_period(user_id, &period)
                .map_err(tag_query(SummaryQuery::ExpenseRecords)),
            self.income_repository
                .list_in_period(user_id, &period)
                .map_err(tag_query(SummaryQuery::IncomeRecords)),
            self.expense_repository
                .totals_by_category(user_id, &period)
                .map_err(tag_query(SummaryQuery::ExpensesByCategory)),
            self.income_repository
                .totals_by_source(user_id, &period)
                .map_err(tag_query(SummaryQuery::IncomesBySource)),
        )?;

        Ok(MonthlyStats {
            period: MonthPeriod {
                year,
                month,
                start_date: period.start,
                end_date: period.end,
            },
            summary: month_summary(expenses_total, incomes_total, &limits),
            expenses_by_category,
            incomes_by_source,
            expenses,
            incomes,
        })
    }

    async fn get_yearly_stats(&self, user_id: i64, year: i32) -> Result<YearlyStats> {
        debug!("Building yearly stats for user {user_id}, {year}");

        let period = Period::year(year)?;

        let (yearly_expenses, yearly_incomes, expenses_by_category, incomes_by_source) = try_join!(
            self.expense_repository
                .total_in_period(user_id, &period)
                .map_err(tag_query(SummaryQuery::ExpenseTotal)),
            self.income_repository
                .total_in_period(user_id, &period)
                .map_err(tag_query(SummaryQuery::IncomeTotal)),
            self.expense_repository
                .totals_by_category(user_id, &period)
                .map_err(tag_query(SummaryQuery::ExpensesByCategory)),
            self.income_repository
                .totals_by_source(user_id, &period)
                .map_err(tag_query(SummaryQuery::IncomesBySource)),
        )?;

        let monthly_data = try_join_all(
            (1..=MONTHS_PER_YEAR).map(|month| self.month_totals(user_id, year, month)),
        )
        .await?;

        let months = Decimal::from(MONTHS_PER_YEAR);
        Ok(YearlyStats {
            period: YearPeriod {
                year,
                start_date: period.start,
                end_date: period.end,
            },
            summary: YearSummary {
                expenses: yearly_expenses,
                incomes: yearly_incomes,
                balance: yearly_incomes - yearly_expenses,
                avg_month: AverageMonth {
                    expenses: yearly_expenses / months,
                    incomes: yearly_incomes / months,
                },
            },
            expenses_by_category,
            incomes_by_source,
            monthly_data,
        })
    }
}

fn month_summary(expenses: Decimal, incomes: Decimal, limits: &UserLimits) -> MonthSummary {
    MonthSummary {
        expenses,
        incomes,
        expenses_percent: percent_of(expenses, limits.monthly_limit),
        savings_percent: percent_of(incomes, limits.savings_goal),
        balance: incomes - expenses,
    }
}

/// `value` as a percentage of `target`; zero when no target is set.
fn percent_of(value: Decimal, target: Decimal) -> Decimal {
    if target.is_zero() {
        Decimal::ZERO
    } else {
        value / target * dec!(100)
    }
}

/// Wraps a sub-query failure with the query tag; cancellation propagates
/// untagged so callers still observe it as cancellation.
fn tag_query(query: SummaryQuery) -> impl FnOnce(Error) -> Error {
    move |err| match err {
        Error::Cancelled => Error::Cancelled,
        err => {
            error!("Dashboard {query} query failed: {err}");
            Error::Aggregation(AggregationError {
                query,
                message: err.to_string(),
            })
        }
    }
}
