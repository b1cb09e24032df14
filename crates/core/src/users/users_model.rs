//! User limits domain model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A user's scalar budget targets.
///
/// Period totals are expressed as percentages of these targets by the
/// dashboard aggregation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UserLimits {
    /// Spending ceiling for a calendar month.
    pub monthly_limit: Decimal,
    /// Savings target for a calendar month.
    pub savings_goal: Decimal,
}
