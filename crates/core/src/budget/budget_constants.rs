use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::expenses::ExpenseCategory;

/// Default monthly target for a category the user has not set a goal for.
pub fn default_goal_amount(category: ExpenseCategory) -> Decimal {
    match category {
        ExpenseCategory::Food => dec!(15000),
        ExpenseCategory::Housing => dec!(20000),
        ExpenseCategory::Utilities => dec!(8000),
        ExpenseCategory::Entertainment => dec!(10000),
        _ => dec!(5000),
    }
}
