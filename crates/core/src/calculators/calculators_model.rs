//! Result models for the financial calculators.
//!
//! Each operation has exactly one result shape, so these are plain structs
//! rather than tagged variants. Field names serialize to the wire names the
//! existing front-ends consume.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Projection of a principal growing under compound interest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompoundInterestResult {
    pub principal: Decimal,
    /// Annual rate, as a percentage.
    pub rate: Decimal,
    /// Investment term in years; may be fractional.
    #[serde(rename = "time")]
    pub years: Decimal,
    /// Compounding periods per year.
    pub frequency: u32,
    pub final_amount: Decimal,
    pub total_interest: Decimal,
    pub yearly_details: Vec<CompoundInterestYearEntry>,
}

/// One calendar year of compound growth.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompoundInterestYearEntry {
    /// 1-based year index.
    pub year: u32,
    /// Running amount before this year's compounding.
    pub start_amount: Decimal,
    /// Running amount after this year's compounding.
    pub end_amount: Decimal,
    pub yearly_interest: Decimal,
    /// Interest accrued since the start of the term.
    #[serde(rename = "total_interest")]
    pub cumulative_interest: Decimal,
}

/// Full mortgage projection: payment, totals, and schedules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MortgageResult {
    pub principal: Decimal,
    /// Annual rate, as a percentage.
    pub rate: Decimal,
    pub years: u32,
    pub months: u32,
    pub monthly_payment: Decimal,
    pub total_payment: Decimal,
    pub total_interest: Decimal,
    pub yearly_details: Vec<MortgageYearEntry>,
    pub amortization_schedule: Vec<AmortizationEntry>,
}

/// One month of an amortization schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationEntry {
    /// 1-based month index.
    pub month: u32,
    pub payment: Decimal,
    pub principal_payment: Decimal,
    pub interest_payment: Decimal,
    /// Principal still owed after this month's payment.
    pub remaining_principal: Decimal,
}

/// One year of an amortization schedule, aggregated for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MortgageYearEntry {
    /// 1-based year index.
    pub year: u32,
    pub yearly_principal_payment: Decimal,
    pub yearly_interest_payment: Decimal,
    pub yearly_total_payment: Decimal,
    /// Principal still owed at the end of the year.
    pub remaining_principal: Decimal,
    /// Share of the original principal repaid by the end of the year.
    pub paid_principal_percentage: Decimal,
}
