//! The worked-days salary calculation method.
//!
//! Builds the salary up from days actually attended instead of deducting
//! from the full base. Absences never appear as a deduction because the
//! absent days were never paid in the first place; lateness and early
//! departure still deduct at the overtime hour rate.

use rust_decimal::Decimal;

use super::rates::{derive_rates, round2};
use super::{SalaryContext, ensure_validated, zeroed_breakdown};
use crate::error::EngineResult;
use crate::models::{CalculationMethod, SalaryBreakdown};

/// Multiplier for pricing a half-day at half the daily rate.
const HALF_DAY_FACTOR: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Calculates a monthly salary with the worked-days method.
///
/// ```text
/// worked_days_salary = worked_days * daily_rate
///                    - half_days * 0.5 * daily_rate
/// net = worked_days_salary + overtime_amount + wage_changes
///     - late_deduction - early_departure_deduction
/// ```
///
/// floored at zero. The half-day reduction is already inside
/// `worked_days_salary`; it is still reported in `half_day_deduction` for
/// the payslip, but `total_deductions` only carries the lateness and
/// early-departure terms actually subtracted from gross. Fails with
/// `MonthNotValidated` when the month's attendance has not been
/// validated and `InvalidParameters` when the injected parameters are
/// out of range; a month with zero worked days short-circuits to the
/// all-zero breakdown.
///
/// # Arguments
///
/// * `context` - The assembled inputs for the (employee, month) run
pub fn calculate_worked_days_salary(context: &SalaryContext<'_>) -> EngineResult<SalaryBreakdown> {
    ensure_validated(context)?;
    let rates = derive_rates(context.compensation, context.parameters)?;

    if context.attendance.worked_days == 0 {
        return Ok(zeroed_breakdown(context, CalculationMethod::WorkedDays));
    }

    let attendance = context.attendance;

    let overtime_amount = round2(attendance.overtime_hours * rates.overtime_hour_rate);
    let late_deduction = round2(attendance.late_hours() * rates.overtime_hour_rate);
    let early_departure_deduction = round2(attendance.early_hours() * rates.overtime_hour_rate);

    let worked_component = round2(Decimal::from(attendance.worked_days) * rates.daily_rate);
    let half_day_deduction =
        round2(Decimal::from(attendance.half_days) * HALF_DAY_FACTOR * rates.daily_rate);
    let worked_days_salary = worked_component - half_day_deduction;

    let total_deductions = late_deduction + early_departure_deduction;
    let gross_salary = worked_days_salary + overtime_amount + attendance.wage_changes;
    let net_salary = (gross_salary - total_deductions).max(Decimal::ZERO);

    Ok(SalaryBreakdown {
        employee_id: context.profile.id.clone(),
        employee_name: context.profile.full_name.clone(),
        position: context.profile.position.clone(),
        department: context.profile.department.clone(),
        month: context.month.month(),
        year: context.month.year(),
        currency: context.parameters.currency.clone(),
        calculation_method: CalculationMethod::WorkedDays,
        base_salary: context.compensation.base_salary,
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
        worked_days_salary: Some(worked_days_salary),
        absence_deduction: Decimal::ZERO,
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::MonthlyAttendance;
    use crate::config::SalaryParameters;
    use crate::error::{EngineError, EngineResult};
    use crate::models::{Compensation, EmployeeProfile, PayMonth, ValidationRecord};
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn profile() -> EmployeeProfile {
        EmployeeProfile {
            id: "emp_002".to_string(),
            full_name: "Rowan Mercer".to_string(),
            position: "Dispatcher".to_string(),
            department: "Logistics".to_string(),
            join_date: NaiveDate::from_ymd_opt(2025, 7, 14).unwrap(),
        }
    }

    fn attendance(worked: u32, half: u32, absent: u32) -> MonthlyAttendance {
        MonthlyAttendance {
            worked_days: worked,
            half_days: half,
            full_days: worked - half,
            absence_days: absent,
            pending_days: 0,
            late_minutes: 0,
            early_minutes: 0,
            overtime_hours: Decimal::ZERO,
            wage_changes: Decimal::ZERO,
        }
    }

    fn run(
        comp: &Compensation,
        totals: &MonthlyAttendance,
        validation: &ValidationRecord,
    ) -> EngineResult<SalaryBreakdown> {
        let profile = profile();
        let parameters = SalaryParameters::default();
        let context = SalaryContext {
            profile: &profile,
            compensation: comp,
            attendance: totals,
            validation,
            month: PayMonth::new(2026, 1).unwrap(),
            parameters: &parameters,
        };
        calculate_worked_days_salary(&context)
    }

    #[test]
    fn test_ten_days_one_half_with_overtime_scenario() {
        let comp = Compensation {
            base_salary: dec("30000"),
            hourly_rate: None,
            overtime_rate: Some(dec("17.05")),
        };
        let mut totals = attendance(10, 1, 0);
        totals.overtime_hours = dec("2");

        let breakdown = run(&comp, &totals, &ValidationRecord::validated()).unwrap();

        // 10 * 1363.64 - 0.5 * 1363.64 = 13636.40 - 681.82
        assert_eq!(breakdown.worked_days_salary, Some(dec("12954.58")));
        assert_eq!(breakdown.overtime_amount, dec("34.10"));
        assert_eq!(breakdown.half_day_deduction, dec("681.82"));
        assert_eq!(breakdown.total_deductions, Decimal::ZERO);
        assert_eq!(breakdown.net_salary, dec("12988.68"));
        assert_eq!(breakdown.calculation_method, CalculationMethod::WorkedDays);
    }

    #[test]
    fn test_absences_never_deduct() {
        let comp = Compensation {
            base_salary: dec("30000"),
            hourly_rate: None,
            overtime_rate: None,
        };
        let with_absences = run(&comp, &attendance(10, 0, 8), &ValidationRecord::validated())
            .unwrap();
        let without_absences = run(&comp, &attendance(10, 0, 0), &ValidationRecord::validated())
            .unwrap();

        assert_eq!(with_absences.absence_deduction, Decimal::ZERO);
        assert_eq!(with_absences.net_salary, without_absences.net_salary);
        assert_eq!(with_absences.absent_days, 8);
    }

    #[test]
    fn test_fewer_worked_days_pay_less() {
        let comp = Compensation {
            base_salary: dec("30000"),
            hourly_rate: None,
            overtime_rate: None,
        };
        let ten = run(&comp, &attendance(10, 0, 0), &ValidationRecord::validated())
            .unwrap()
            .net_salary;
        let nine = run(&comp, &attendance(9, 0, 0), &ValidationRecord::validated())
            .unwrap()
            .net_salary;

        assert!(nine < ten);
        assert_eq!(ten - nine, dec("1363.64"));
    }

    #[test]
    fn test_late_minutes_still_deduct() {
        let comp = Compensation {
            base_salary: dec("30000"),
            hourly_rate: None,
            overtime_rate: None,
        };
        let mut totals = attendance(20, 0, 0);
        totals.late_minutes = 60;

        let breakdown = run(&comp, &totals, &ValidationRecord::validated()).unwrap();
        // 1 h at the derived overtime rate of 255.68.
        assert_eq!(breakdown.late_deduction, dec("255.68"));
        assert_eq!(breakdown.total_deductions, dec("255.68"));
        assert_eq!(breakdown.net_salary, dec("27017.12"));
    }

    #[test]
    fn test_zero_worked_days_short_circuits() {
        let comp = Compensation {
            base_salary: dec("30000"),
            hourly_rate: None,
            overtime_rate: None,
        };
        let breakdown = run(&comp, &attendance(0, 0, 22), &ValidationRecord::validated())
            .unwrap();

        assert!(breakdown.zero_worked_days);
        assert_eq!(breakdown.worked_days_salary, Some(Decimal::ZERO));
        assert_eq!(breakdown.net_salary, Decimal::ZERO);
        assert_eq!(breakdown.absent_days, 22);
    }

    #[test]
    fn test_unvalidated_month_is_rejected() {
        let comp = Compensation {
            base_salary: dec("30000"),
            hourly_rate: None,
            overtime_rate: None,
        };
        let result = run(&comp, &attendance(10, 0, 0), &ValidationRecord::default());

        assert!(matches!(
            result,
            Err(EngineError::MonthNotValidated { month: 1, year: 2026, .. })
        ));
    }

    #[test]
    fn test_negative_wage_changes_can_floor_net() {
        let comp = Compensation {
            base_salary: dec("30000"),
            hourly_rate: None,
            overtime_rate: None,
        };
        let mut totals = attendance(1, 0, 0);
        totals.wage_changes = dec("-5000");

        let breakdown = run(&comp, &totals, &ValidationRecord::validated()).unwrap();
        assert_eq!(breakdown.net_salary, Decimal::ZERO);
    }
}
