//! Calculation logic for the payroll engine.
//!
//! This module contains the pure functions of the attendance-to-payroll
//! pipeline: schedule resolution for a date, collapsing raw punches into a
//! daily entry/exit pair, classifying each day's attendance status,
//! aggregating a month of day records, deriving pay rates, and the two
//! salary formulas (standard and worked-days) that price the aggregates.

mod day_status;
mod monthly_totals;
mod punch_day;
mod rates;
mod schedule_resolver;
mod standard_method;
mod worked_days_method;

pub use day_status::classify_day;
pub use monthly_totals::{MonthlyAttendance, aggregate_month};
pub use punch_day::collapse_day_punches;
pub use rates::{DerivedRates, derive_rates, round2};
pub use schedule_resolver::resolve_intervals;
pub use standard_method::calculate_standard_salary;
pub use worked_days_method::calculate_worked_days_salary;

use rust_decimal::Decimal;

use crate::config::SalaryParameters;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    CalculationMethod, Compensation, EmployeeProfile, PayMonth, SalaryBreakdown, ValidationRecord,
};

/// Everything a salary formula needs for one (employee, month) run.
///
/// The engine assembles this after its boundary reads complete; the
/// formulas themselves perform no I/O.
#[derive(Debug, Clone, Copy)]
pub struct SalaryContext<'a> {
    /// The employee's identity record.
    pub profile: &'a EmployeeProfile,
    /// The employee's compensation record.
    pub compensation: &'a Compensation,
    /// The month's aggregated attendance totals.
    pub attendance: &'a MonthlyAttendance,
    /// The month's validation state.
    pub validation: &'a ValidationRecord,
    /// The month being calculated.
    pub month: PayMonth,
    /// The salary parameters in force for the run.
    pub parameters: &'a SalaryParameters,
}

/// Rejects the run unless the month's attendance has been validated.
pub(crate) fn ensure_validated(context: &SalaryContext<'_>) -> EngineResult<()> {
    if context.validation.is_validated {
        return Ok(());
    }
    Err(EngineError::MonthNotValidated {
        employee_id: context.profile.id.clone(),
        month: context.month.month(),
        year: context.month.year(),
    })
}

/// Builds the all-zero breakdown for a month with no worked days.
///
/// Attendance counts and external hour totals pass through for the
/// record; every monetary field is forced to zero and the flag is set.
pub(crate) fn zeroed_breakdown(
    context: &SalaryContext<'_>,
    method: CalculationMethod,
) -> SalaryBreakdown {
    let attendance = context.attendance;
    let worked_days_salary = match method {
        CalculationMethod::Standard => None,
        CalculationMethod::WorkedDays => Some(Decimal::ZERO),
    };

    SalaryBreakdown {
        employee_id: context.profile.id.clone(),
        employee_name: context.profile.full_name.clone(),
        position: context.profile.position.clone(),
        department: context.profile.department.clone(),
        month: context.month.month(),
        year: context.month.year(),
        currency: context.parameters.currency.clone(),
        calculation_method: method,
        base_salary: Decimal::ZERO,
        daily_rate: Decimal::ZERO,
        hourly_rate: Decimal::ZERO,
        overtime_hour_rate: Decimal::ZERO,
        worked_days: attendance.worked_days,
        absent_days: attendance.absence_days,
        half_days: attendance.half_days,
        full_days: attendance.full_days,
        pending_days: attendance.pending_days,
        overtime_hours: attendance.overtime_hours,
        late_hours: attendance.late_hours(),
        early_departure_hours: attendance.early_hours(),
        overtime_amount: Decimal::ZERO,
        wage_changes: Decimal::ZERO,
        worked_days_salary,
        absence_deduction: Decimal::ZERO,
        half_day_deduction: Decimal::ZERO,
        late_deduction: Decimal::ZERO,
        early_departure_deduction: Decimal::ZERO,
        total_deductions: Decimal::ZERO,
        gross_salary: Decimal::ZERO,
        net_salary: Decimal::ZERO,
        zero_worked_days: true,
        validation: context.validation.clone(),
    }
}
