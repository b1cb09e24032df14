//! Income domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Fixed set of income sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncomeSource {
    Salary,
    Freelance,
    Investment,
    Gift,
    Rental,
    Other,
}

/// Summed income amount per source over a period.
///
/// Sources with no records in the period are absent; an absent key means
/// zero.
pub type SourceBreakdown = HashMap<IncomeSource, Decimal>;

/// Domain model representing a recorded income.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Income {
    pub id: i64,
    pub user_id: i64,
    pub amount: Decimal,
    pub source: IncomeSource,
    pub date: NaiveDateTime,
    pub description: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
