//! Financial calculators module - compound interest and mortgage
//! amortization projections.

mod calculators_model;
mod calculators_service;
mod calculators_traits;


pub use calculators_model::{
    AmortizationEntry, CompoundInterestResult, CompoundInterestYearEntry, MortgageResult,
    MortgageYearEntry,
};
pub use calculators_service::CalculatorService;
pub use calculators_traits::CalculatorServiceTrait;
