use std::sync::Arc;

use chrono::NaiveDateTime;
use log::debug;
use num_traits::Zero;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::budget_constants::default_goal_amount;
use super::budget_model::BudgetGoal;
use super::budget_traits::{BudgetGoalRepositoryTrait, BudgetServiceTrait};
use crate::errors::{Error, Result};
use crate::expenses::{ExpenseCategory, ExpenseRepositoryTrait};
use crate::users::UserRepositoryTrait;
use crate::utils::time_utils::{now_utc, Period};

/// Merges per-category budget goals with actual current-month spending.
pub struct BudgetService {
    budget_repository: Arc<dyn BudgetGoalRepositoryTrait>,
    expense_repository: Arc<dyn ExpenseRepositoryTrait>,
    user_repository: Arc<dyn UserRepositoryTrait>,
}

impl BudgetService {
    pub fn new(
        budget_repository: Arc<dyn BudgetGoalRepositoryTrait>,
        expense_repository: Arc<dyn ExpenseRepositoryTrait>,
        user_repository: Arc<dyn UserRepositoryTrait>,
    ) -> Self {
        BudgetService {
            budget_repository,
            expense_repository,
            user_repository,
        }
    }

    /// Goal composition against an explicit clock, so tests can pin the
    /// current month.
    pub(crate) async fn get_budget_goals_at(
        &self,
        user_id: i64,
        now: NaiveDateTime,
    ) -> Result<Vec<BudgetGoal>> {
        debug!("Building budget goals for user {user_id}");

        // Missing user surfaces as NotFound before any ledger query runs.
        self.user_repository.get_user_limits(user_id).await?;

        let current_month = Period::month_of(now);
        let stored_goals = self.budget_repository.goal_amounts(user_id).await?;
        let spent_by_category = self
            .expense_repository
            .totals_by_category(user_id, &current_month)
            .await?;

        let goals = ExpenseCategory::ALL
            .iter()
            .map(|&category| {
                let amount = stored_goals
                    .get(&category)
                    .copied()
                    .unwrap_or_else(|| default_goal_amount(category));
                let spent = spent_by_category
                    .get(&category)
                    .copied()
                    .unwrap_or_else(Decimal::zero);
                let percent_used = if amount.is_zero() {
                    Decimal::zero()
                } else {
                    spent / amount * dec!(100)
                };

                BudgetGoal {
                    category,
                    amount,
                    spent,
                    remaining: amount - spent,
                    percent_used,
                }
            })
            .collect();

        Ok(goals)
    }
}

#[async_trait::async_trait]
impl BudgetServiceTrait for BudgetService {
    async fn get_budget_goals(&self, user_id: i64) -> Result<Vec<BudgetGoal>> {
        self.get_budget_goals_at(user_id, now_utc()).await
    }

    async fn set_budget_goal(
        &self,
        user_id: i64,
        category: ExpenseCategory,
        amount: Decimal,
    ) -> Result<()> {
        debug!("Setting budget goal for user {user_id}: {category:?} = {amount}");

        if amount < Decimal::ZERO {
            return Err(Error::invalid_input("amount must not be negative"));
        }
        self.user_repository.get_user_limits(user_id).await?;

        self.budget_repository
            .upsert_goal(user_id, category, amount)
            .await
    }
}
