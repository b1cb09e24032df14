use log::debug;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;

use super::calculators_model::{
    AmortizationEntry, CompoundInterestResult, CompoundInterestYearEntry, MortgageResult,
    MortgageYearEntry,
};
use super::calculators_traits::CalculatorServiceTrait;
use crate::constants::MORTGAGE_PAYMENTS_PER_YEAR;
use crate::errors::{Error, Result};

const PERCENT: Decimal = dec!(100);

/// Longest term either calculator will build a schedule for.
const MAX_TERM_YEARS: u32 = 1000;

/// Stateless implementation of the financial calculators.
#[derive(Debug, Default, Clone, Copy)]
pub struct CalculatorService;

impl CalculatorService {
    pub fn new() -> Self {
        CalculatorService
    }
}

impl CalculatorServiceTrait for CalculatorService {
    fn compound_interest(
        &self,
        principal: Decimal,
        annual_rate_percent: Decimal,
        years: Decimal,
        compoundings_per_year: u32,
    ) -> Result<CompoundInterestResult> {
        debug!(
            "Calculating compound interest: principal={}, rate={}%, years={}, frequency={}",
            principal, annual_rate_percent, years, compoundings_per_year
        );

        if principal <= Decimal::ZERO {
            return Err(Error::invalid_input("principal must be greater than zero"));
        }
        if annual_rate_percent < Decimal::ZERO {
            return Err(Error::invalid_input("rate must not be negative"));
        }
        if years <= Decimal::ZERO {
            return Err(Error::invalid_input("years must be greater than zero"));
        }
        if years > Decimal::from(MAX_TERM_YEARS) {
            return Err(Error::invalid_input("years must not exceed 1000"));
        }
        if compoundings_per_year == 0 {
            return Err(Error::invalid_input("frequency must be greater than zero"));
        }

        let period_rate =
            annual_rate_percent / PERCENT / Decimal::from(compoundings_per_year);
        let growth_per_period = Decimal::ONE + period_rate;

        let full_years = years
            .floor()
            .to_u32()
            .ok_or_else(|| Error::invalid_input("years is out of range"))?;
        let total_years = years
            .ceil()
            .to_u32()
            .ok_or_else(|| Error::invalid_input("years is out of range"))?;
        // Fractional-year remainder periods, truncated toward zero.
        let extra_periods = ((years - years.floor()) * Decimal::from(compoundings_per_year))
            .trunc()
            .to_u32()
            .unwrap_or(0);

        let full_periods = i64::from(full_years) * i64::from(compoundings_per_year);
        let mut final_amount = principal
            * checked_growth(growth_per_period, full_periods)?;
        if extra_periods > 0 {
            final_amount *= checked_growth(growth_per_period, i64::from(extra_periods))?;
        }
        let total_interest = final_amount - principal;

        let mut yearly_details = Vec::with_capacity(total_years as usize);
        let mut current_amount = principal;
        for year in 1..=total_years {
            // The trailing partial year compounds only the remainder periods.
            let periods_in_year = if year > full_years {
                extra_periods
            } else {
                compoundings_per_year
            };
            let start_amount = current_amount;
            let end_amount =
                start_amount * checked_growth(growth_per_period, i64::from(periods_in_year))?;
            current_amount = end_amount;

            yearly_details.push(CompoundInterestYearEntry {
                year,
                start_amount,
                end_amount,
                yearly_interest: end_amount - start_amount,
                cumulative_interest: end_amount - principal,
            });
        }

        Ok(CompoundInterestResult {
            principal,
            rate: annual_rate_percent,
            years,
            frequency: compoundings_per_year,
            final_amount,
            total_interest,
            yearly_details,
        })
    }

    fn mortgage(
        &self,
        principal: Decimal,
        annual_rate_percent: Decimal,
        years: u32,
    ) -> Result<MortgageResult> {
        debug!(
            "Calculating mortgage: principal={}, rate={}%, years={}",
            principal, annual_rate_percent, years
        );

        if principal <= Decimal::ZERO {
            return Err(Error::invalid_input("principal must be greater than zero"));
        }
        if annual_rate_percent < Decimal::ZERO {
            return Err(Error::invalid_input("rate must not be negative"));
        }
        if years == 0 {
            return Err(Error::invalid_input("years must be greater than zero"));
        }
        if years > MAX_TERM_YEARS {
            return Err(Error::invalid_input("years must not exceed 1000"));
        }

        let months = years * MORTGAGE_PAYMENTS_PER_YEAR;
        let monthly_rate =
            annual_rate_percent / PERCENT / Decimal::from(MORTGAGE_PAYMENTS_PER_YEAR);

        // The annuity formula divides by (1+r)^n - 1, which is zero at a
        // zero rate; an interest-free loan amortizes linearly.
        let monthly_payment = if monthly_rate.is_zero() {
            principal / Decimal::from(months)
        } else {
            let growth = checked_growth(Decimal::ONE + monthly_rate, i64::from(months))?;
            principal * (monthly_rate * growth) / (growth - Decimal::ONE)
        };

        let total_payment = monthly_payment * Decimal::from(months);
        let total_interest = total_payment - principal;

        let mut amortization_schedule = Vec::with_capacity(months as usize);
        let mut remaining_principal = principal;
        for month in 1..=months {
            let interest_payment = remaining_principal * monthly_rate;
            let principal_payment = monthly_payment - interest_payment;
            remaining_principal -= principal_payment;

            amortization_schedule.push(AmortizationEntry {
                month,
                payment: monthly_payment,
                principal_payment,
                interest_payment,
                remaining_principal,
            });
        }

        let mut yearly_details = Vec::with_capacity(years as usize);
        for year in 1..=years {
            let year_start = ((year - 1) * MORTGAGE_PAYMENTS_PER_YEAR) as usize;
            let year_end = (year * MORTGAGE_PAYMENTS_PER_YEAR) as usize - 1;
            let year_months = &amortization_schedule[year_start..=year_end];

            let yearly_principal_payment: Decimal =
                year_months.iter().map(|entry| entry.principal_payment).sum();
            let yearly_interest_payment: Decimal =
                year_months.iter().map(|entry| entry.interest_payment).sum();
            let remaining_at_year_end = amortization_schedule[year_end].remaining_principal;

            yearly_details.push(MortgageYearEntry {
                year,
                yearly_principal_payment,
                yearly_interest_payment,
                yearly_total_payment: yearly_principal_payment + yearly_interest_payment,
                remaining_principal: remaining_at_year_end,
                paid_principal_percentage: (principal - remaining_at_year_end) / principal
                    * PERCENT,
            });
        }

        Ok(MortgageResult {
            principal,
            rate: annual_rate_percent,
            years,
            months,
            monthly_payment,
            total_payment,
            total_interest,
            yearly_details,
            amortization_schedule,
        })
    }
}

/// `base^exponent`, rejecting inputs whose growth factor overflows the
/// decimal range instead of panicking mid-schedule.
fn checked_growth(base: Decimal, exponent: i64) -> Result<Decimal> {
    base.checked_powi(exponent)
        .ok_or_else(|| Error::invalid_input("rate and term produce an amount out of range"))
}
