//! Dashboard service trait.

use async_trait::async_trait;

use super::dashboard_model::{DashboardSummary, MonthlyStats, YearlyStats};
use crate::errors::Result;

/// Read-only composition of ledger queries into dashboard views.
///
/// Every call is a stateless composition of repository queries; the service
/// holds no state between calls and never mutates persisted data.
#[async_trait]
pub trait DashboardServiceTrait: Send + Sync {
    /// The landing-page summary: current-month and all-time totals, goal
    /// percentages, current-month breakdowns, and the most recent records.
    ///
    /// `recent_limit` bounds the recent-record lists and defaults to
    /// [`crate::constants::DEFAULT_RECENT_LIMIT`].
    async fn get_summary(
        &self,
        user_id: i64,
        recent_limit: Option<u32>,
    ) -> Result<DashboardSummary>;

    /// Statistics for one calendar month, including the full record lists.
    async fn get_monthly_stats(&self, user_id: i64, year: i32, month: u32)
        -> Result<MonthlyStats>;

    /// Statistics for one calendar year, including per-month totals.
    ///
    /// Unlike the other views, an individual month whose totals query fails
    /// reports zeros instead of failing the call; the year view is always
    /// renderable.
    async fn get_yearly_stats(&self, user_id: i64, year: i32) -> Result<YearlyStats>;
}
