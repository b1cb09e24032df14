//! Incomes module - domain models and repository contract.

mod incomes_model;
mod incomes_traits;

pub use incomes_model::{Income, IncomeSource, SourceBreakdown};
pub use incomes_traits::IncomeRepositoryTrait;
