//! Budget goal repository and service traits.

use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::budget_model::BudgetGoal;
use crate::errors::Result;
use crate::expenses::ExpenseCategory;

/// Per-user budget goal store contract.
///
/// Implemented by the storage layer like the other repository contracts.
#[async_trait]
pub trait BudgetGoalRepositoryTrait: Send + Sync {
    /// The user's stored goal amounts, keyed by category. Categories the
    /// user never set a goal for are absent.
    async fn goal_amounts(&self, user_id: i64) -> Result<HashMap<ExpenseCategory, Decimal>>;

    /// Creates or replaces the user's goal for a category.
    async fn upsert_goal(
        &self,
        user_id: i64,
        category: ExpenseCategory,
        amount: Decimal,
    ) -> Result<()>;
}

/// Budget goal operations exposed to the HTTP and bot layers.
#[async_trait]
pub trait BudgetServiceTrait: Send + Sync {
    /// One goal per category (stored amount or default), merged with the
    /// actual current-month spending.
    async fn get_budget_goals(&self, user_id: i64) -> Result<Vec<BudgetGoal>>;

    /// Sets the user's goal for a category. The amount must not be
    /// negative.
    async fn set_budget_goal(
        &self,
        user_id: i64,
        category: ExpenseCategory,
        amount: Decimal,
    ) -> Result<()>;
}
