//! Calculator service trait.

use rust_decimal::Decimal;

use super::calculators_model::{CompoundInterestResult, MortgageResult};
use crate::errors::Result;

/// Deterministic, side-effect-free financial projections.
///
/// Both operations are pure computations; the trait exists so the HTTP and
/// bot layers can hold the calculators as a trait object beside the other
/// services.
pub trait CalculatorServiceTrait: Send + Sync {
    /// Projects compound growth of `principal` at `annual_rate_percent` over
    /// `years` (possibly fractional), compounding `compoundings_per_year`
    /// times per year.
    fn compound_interest(
        &self,
        principal: Decimal,
        annual_rate_percent: Decimal,
        years: Decimal,
        compoundings_per_year: u32,
    ) -> Result<CompoundInterestResult>;

    /// Computes the fixed monthly payment and full amortization schedule for
    /// a `years`-year mortgage of `principal` at `annual_rate_percent`.
    fn mortgage(
        &self,
        principal: Decimal,
        annual_rate_percent: Decimal,
        years: u32,
    ) -> Result<MortgageResult>;
}
