//! Expense repository query contract.
//!
//! The contract is database-agnostic: implementations live in the storage
//! layer, and the aggregation services in this crate only consume it.

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::expenses_model::{CategoryBreakdown, Expense};
use crate::errors::Result;
use crate::utils::time_utils::Period;

/// Read-only queries over the expense ledger.
#[async_trait]
pub trait ExpenseRepositoryTrait: Send + Sync {
    /// Sum of expense amounts for the user within the period.
    async fn total_in_period(&self, user_id: i64, period: &Period) -> Result<Decimal>;

    /// Per-category expense sums for the user within the period.
    async fn totals_by_category(&self, user_id: i64, period: &Period)
        -> Result<CategoryBreakdown>;

    /// All expenses for the user within the period.
    async fn list_in_period(&self, user_id: i64, period: &Period) -> Result<Vec<Expense>>;

    /// The `limit` most recent expenses for the user, newest first.
    async fn list_recent(&self, user_id: i64, limit: u32) -> Result<Vec<Expense>>;
}
