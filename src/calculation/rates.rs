//! Pay rate derivation shared by both salary calculation methods.
//!
//! This module derives the daily, hourly, and overtime rates from an
//! employee's compensation record and the injected salary parameters.
//! Explicit nonzero rates on the compensation record always take
//! precedence over derived fallbacks.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::SalaryParameters;
use crate::error::EngineResult;
use crate::models::Compensation;

/// Hours assumed per working day when deriving an hourly rate.
const HOURS_PER_WORKING_DAY: u32 = 8;

/// The three pay rates every salary calculation prices with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedRates {
    /// Base salary divided by the configured working days per month.
    pub daily_rate: Decimal,
    /// Explicit hourly rate, or base salary over monthly working hours.
    pub hourly_rate: Decimal,
    /// Explicit overtime rate, or hourly rate times the multiplier.
    pub overtime_hour_rate: Decimal,
}

/// Rounds a monetary value to 2 decimal places, midpoint away from zero.
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Derives the pay rates for one employee.
///
/// Each derived rate is rounded to 2 decimal places at the point of
/// derivation; explicit rates pass through unchanged. An explicit rate of
/// zero is treated as unset, falling back to the derived value.
///
/// The parameters are validated first, so an out-of-range
/// `working_days_per_month` fails with `InvalidParameters` instead of
/// reaching the division.
///
/// # Arguments
///
/// * `compensation` - The employee's compensation record
/// * `parameters` - The salary parameters in force for the run
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::derive_rates;
/// use payroll_engine::config::SalaryParameters;
/// use payroll_engine::models::Compensation;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let compensation = Compensation {
///     base_salary: Decimal::from_str("30000").unwrap(),
///     hourly_rate: None,
///     overtime_rate: None,
/// };
/// let rates = derive_rates(&compensation, &SalaryParameters::default()).unwrap();
/// assert_eq!(rates.daily_rate, Decimal::from_str("1363.64").unwrap());
/// ```
pub fn derive_rates(
    compensation: &Compensation,
    parameters: &SalaryParameters,
) -> EngineResult<DerivedRates> {
    parameters.validate()?;

    let working_days = Decimal::from(parameters.working_days_per_month);
    let monthly_hours = Decimal::from(parameters.working_days_per_month * HOURS_PER_WORKING_DAY);

    let daily_rate = round2(compensation.base_salary / working_days);

    let hourly_rate = match compensation.hourly_rate {
        Some(explicit) if !explicit.is_zero() => explicit,
        _ => round2(compensation.base_salary / monthly_hours),
    };

    let overtime_hour_rate = match compensation.overtime_rate {
        Some(explicit) if !explicit.is_zero() => explicit,
        _ => round2(hourly_rate * parameters.overtime_multiplier),
    };

    Ok(DerivedRates {
        daily_rate,
        hourly_rate,
        overtime_hour_rate,
    })
}
