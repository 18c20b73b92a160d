//! The standard salary calculation method.
//!
//! Starts from the full monthly base salary and deducts what was not
//! delivered: absent days and half-days at the daily rate, lateness and
//! early departure at the overtime hour rate.

use rust_decimal::Decimal;

use super::rates::{derive_rates, round2};
use super::{SalaryContext, ensure_validated, zeroed_breakdown};
use crate::error::EngineResult;
use crate::models::{CalculationMethod, SalaryBreakdown};

/// Multiplier for pricing a half-day at half the daily rate.
const HALF_DAY_FACTOR: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Calculates a monthly salary with the standard method.
///
/// ```text
/// net = base_salary + overtime_amount + wage_changes
///     - absence_deduction - half_day_deduction
///     - late_deduction - early_departure_deduction
/// ```
///
/// floored at zero. Absences are priced at the daily rate, half-days at
/// half the daily rate, and lateness and early departure hours at the
/// overtime hour rate. Fails with `MonthNotValidated` when the month's
/// attendance has not been validated and `InvalidParameters` when the
/// injected parameters are out of range; a month with zero worked days
/// short-circuits to the all-zero breakdown.
///
/// # Arguments
///
/// * `context` - The assembled inputs for the (employee, month) run
pub fn calculate_standard_salary(context: &SalaryContext<'_>) -> EngineResult<SalaryBreakdown> {
    ensure_validated(context)?;
    let rates = derive_rates(context.compensation, context.parameters)?;

    if context.attendance.worked_days == 0 {
        return Ok(zeroed_breakdown(context, CalculationMethod::Standard));
    }

    let attendance = context.attendance;
    let base_salary = context.compensation.base_salary;

    let overtime_amount = round2(attendance.overtime_hours * rates.overtime_hour_rate);
    let late_deduction = round2(attendance.late_hours() * rates.overtime_hour_rate);
    let early_departure_deduction = round2(attendance.early_hours() * rates.overtime_hour_rate);
    let absence_deduction = round2(Decimal::from(attendance.absence_days) * rates.daily_rate);
    let half_day_deduction =
        round2(Decimal::from(attendance.half_days) * HALF_DAY_FACTOR * rates.daily_rate);

    let total_deductions =
        absence_deduction + half_day_deduction + late_deduction + early_departure_deduction;
    let gross_salary = base_salary + overtime_amount + attendance.wage_changes;
    let net_salary = (gross_salary - total_deductions).max(Decimal::ZERO);

    Ok(SalaryBreakdown {
        employee_id: context.profile.id.clone(),
        employee_name: context.profile.full_name.clone(),
        position: context.profile.position.clone(),
        department: context.profile.department.clone(),
        month: context.month.month(),
        year: context.month.year(),
        currency: context.parameters.currency.clone(),
        calculation_method: CalculationMethod::Standard,
        base_salary,
        daily_rate: rates.daily_rate,
        hourly_rate: rates.hourly_rate,
        overtime_hour_rate: rates.overtime_hour_rate,
        worked_days: attendance.worked_days,
        absent_days: attendance.absence_days,
        half_days: attendance.half_days,
        full_days: attendance.full_days,
        pending_days: attendance.pending_days,
        overtime_hours: attendance.overtime_hours,
        late_hours: attendance.late_hours(),
        early_departure_hours: attendance.early_hours(),
        overtime_amount,
        wage_changes: attendance.wage_changes,
        worked_days_salary: None,
        absence_deduction,
        half_day_deduction,
        late_deduction,
        early_departure_deduction,
        total_deductions,
        gross_salary,
        net_salary,
        zero_worked_days: false,
        validation: context.validation.clone(),
    })
}
