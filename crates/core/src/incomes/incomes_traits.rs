//! Income repository query contract.

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::incomes_model::{Income, SourceBreakdown};
use crate::errors::Result;
use crate::utils::time_utils::Period;

/// Read-only queries over the income ledger.
#[async_trait]
pub trait IncomeRepositoryTrait: Send + Sync {
    /// Sum of income amounts for the user within the period.
    async fn total_in_period(&self, user_id: i64, period: &Period) -> Result<Decimal>;

    /// Per-source income sums for the user within the period.
    async fn totals_by_source(&self, user_id: i64, period: &Period) -> Result<SourceBreakdown>;

    /// All incomes for the user within the period.
    async fn list_in_period(&self, user_id: i64, period: &Period) -> Result<Vec<Income>>;

    /// The `limit` most recent incomes for the user, newest first.
    async fn list_recent(&self, user_id: i64, limit: u32) -> Result<Vec<Income>>;
}
