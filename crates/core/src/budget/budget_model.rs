//! Budget goal domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::expenses::ExpenseCategory;

/// A per-category monthly spending target merged with the actual
/// current-month spending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetGoal {
    pub category: ExpenseCategory,
    /// Target amount: the user's stored goal, or the category default when
    /// none has been set.
    pub amount: Decimal,
    /// Actual spending in the category this month.
    pub spent: Decimal,
    /// Target minus spending; negative when the category is over budget.
    pub remaining: Decimal,
    /// Spending as a share of the target; zero when the target is zero.
    pub percent_used: Decimal,
}
