//! Expenses module - domain models and repository contract.

mod expenses_model;
mod expenses_traits;

pub use expenses_model::{CategoryBreakdown, Expense, ExpenseCategory};
pub use expenses_traits::ExpenseRepositoryTrait;
