//! Salary calculation result models.
//!
//! This module contains the [`SalaryBreakdown`] type that captures every
//! itemized component of a monthly salary calculation, together with the
//! [`CalculationMethod`] tag and the read-only [`ValidationRecord`] gate.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which salary formula produced a breakdown.
///
/// # Example
///
/// ```
/// use payroll_engine::models::CalculationMethod;
///
/// let method: CalculationMethod = serde_json::from_str("\"worked_days\"").unwrap();
/// assert_eq!(method, CalculationMethod::WorkedDays);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationMethod {
    /// Full base salary minus absence, half-day, lateness, and
    /// early-departure deductions.
    Standard,
    /// Salary built up from days actually worked; absences never deduct
    /// because they were never paid.
    WorkedDays,
}

impl fmt::Display for CalculationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalculationMethod::Standard => write!(f, "standard"),
            CalculationMethod::WorkedDays => write!(f, "worked_days"),
        }
    }
}

/// The attendance validation state of one (employee, month, year).
///
/// Owned by the attendance review workflow; the engine only reads it.
/// Both salary formulas refuse to run until `is_validated` is true.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRecord {
    /// Whether the month's attendance has been reviewed and approved.
    pub is_validated: bool,
    /// When the validation happened, if it did.
    pub validated_at: Option<NaiveDateTime>,
    /// Who validated the month, if anyone.
    pub validated_by: Option<String>,
}

impl ValidationRecord {
    /// A validated record with no reviewer metadata, for callers that only
    /// track the boolean gate.
    pub fn validated() -> Self {
        Self {
            is_validated: true,
            validated_at: None,
            validated_by: None,
        }
    }
}

/// The complete itemized result of one monthly salary calculation.
///
/// Every monetary component appears as its own field so the caller can
/// render a payslip without re-deriving anything. The breakdown carries
/// no generated ids or timestamps: computing the same month twice from
/// the same inputs yields byte-identical serialized output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// The employee this breakdown belongs to.
    pub employee_id: String,
    /// The employee's full name, passed through from the profile.
    pub employee_name: String,
    /// The employee's position, passed through from the profile.
    pub position: String,
    /// The employee's department, passed through from the profile.
    pub department: String,
    /// The calculation month (1-12).
    pub month: u32,
    /// The calculation year.
    pub year: i32,
    /// The currency label all monetary fields are denominated in.
    pub currency: String,
    /// Which formula produced this breakdown.
    pub calculation_method: CalculationMethod,

    /// The monthly base salary from the compensation record.
    pub base_salary: Decimal,
    /// Base salary divided by the configured working days per month.
    pub daily_rate: Decimal,
    /// Explicit hourly rate, or the derived fallback.
    pub hourly_rate: Decimal,
    /// Explicit overtime rate, or hourly rate times the overtime multiplier.
    pub overtime_hour_rate: Decimal,

    /// Days the employee attended (half-days included).
    pub worked_days: u32,
    /// Scheduled days with no attendance evidence and no override.
    pub absent_days: u32,
    /// Worked days credited at half value.
    pub half_days: u32,
    /// Worked days credited at full value.
    pub full_days: u32,
    /// Days left unresolved by a lone punch, awaiting review.
    pub pending_days: u32,

    /// Approved overtime hours for the month.
    pub overtime_hours: Decimal,
    /// Total lateness beyond grace, in hours.
    pub late_hours: Decimal,
    /// Total early departure beyond grace, in hours.
    pub early_departure_hours: Decimal,

    /// Overtime hours priced at the overtime rate.
    pub overtime_amount: Decimal,
    /// Signed sum of ad hoc wage adjustments for the month.
    pub wage_changes: Decimal,
    /// Pay earned from attended days (worked-days method only; `None`
    /// under the standard method).
    pub worked_days_salary: Option<Decimal>,

    /// Absent days priced at the daily rate (zero under worked-days).
    pub absence_deduction: Decimal,
    /// Half the daily rate per half-day (reported under both methods;
    /// already inside `worked_days_salary` under worked-days).
    pub half_day_deduction: Decimal,
    /// Late hours priced at the overtime rate.
    pub late_deduction: Decimal,
    /// Early-departure hours priced at the overtime rate.
    pub early_departure_deduction: Decimal,
    /// Sum of the deductions the method actually subtracts.
    pub total_deductions: Decimal,

    /// Earnings before deductions.
    pub gross_salary: Decimal,
    /// Final payable amount, floored at zero.
    pub net_salary: Decimal,

    /// True when the month had no worked days and every monetary field
    /// was forced to zero.
    pub zero_worked_days: bool,
    /// The validation state the calculation ran under.
    pub validation: ValidationRecord,
}
