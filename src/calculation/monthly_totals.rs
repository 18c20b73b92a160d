//! Monthly attendance aggregation.
//!
//! Folds a month's worth of classified day records into the flat totals
//! the salary calculators consume.

use rust_decimal::Decimal;

use super::rates::round2;
use crate::models::{DayRecord, DayStatus};

/// Minutes-to-hours conversion base.
const MINUTES_PER_HOUR: i64 = 60;

/// Aggregated attendance totals for one employee and month.
///
/// Worked, absent, and pending day counts partition the month's scheduled
/// days. Half-days count toward `worked_days` and again in `half_days`;
/// `full_days` is the remainder. Overtime hours and wage changes are
/// externally authored monthly totals carried through unmodified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyAttendance {
    /// Days the employee attended, half-days included.
    pub worked_days: u32,
    /// Worked days credited at half value.
    pub half_days: u32,
    /// Worked days credited at full value.
    pub full_days: u32,
    /// Scheduled days with no attendance and no overriding decision.
    pub absence_days: u32,
    /// Days left unresolved by a lone punch.
    pub pending_days: u32,
    /// Total lateness beyond grace, in minutes.
    pub late_minutes: i64,
    /// Total early departure beyond grace, in minutes.
    pub early_minutes: i64,
    /// Approved overtime hours for the month.
    pub overtime_hours: Decimal,
    /// Signed sum of ad hoc wage adjustments for the month.
    pub wage_changes: Decimal,
}

impl MonthlyAttendance {
    /// Total lateness in hours, rounded to 2 decimal places.
    pub fn late_hours(&self) -> Decimal {
        round2(Decimal::from(self.late_minutes) / Decimal::from(MINUTES_PER_HOUR))
    }

    /// Total early departure in hours, rounded to 2 decimal places.
    pub fn early_hours(&self) -> Decimal {
        round2(Decimal::from(self.early_minutes) / Decimal::from(MINUTES_PER_HOUR))
    }
}

/// Aggregates one month of classified days into [`MonthlyAttendance`].
///
/// Unscheduled days never appear in `day_records` (the classifier returns
/// nothing for them), so every record lands in exactly one of the worked,
/// absent, or pending counts. Late and early minutes are summed across
/// Present days; override-decided days carry zero minutes by construction.
///
/// # Arguments
///
/// * `day_records` - The month's classified days
/// * `overtime_hours` - Approved overtime total for the month
/// * `wage_changes` - Signed wage adjustment total for the month
pub fn aggregate_month(
    day_records: &[DayRecord],
    overtime_hours: Decimal,
    wage_changes: Decimal,
) -> MonthlyAttendance {
    let mut worked_days = 0u32;
    let mut half_days = 0u32;
    let mut absence_days = 0u32;
    let mut pending_days = 0u32;
    let mut late_minutes = 0i64;
    let mut early_minutes = 0i64;

    for record in day_records {
        match record.status {
            DayStatus::Present => {
                worked_days += 1;
                if record.half_day {
                    half_days += 1;
                }
                late_minutes += record.late_minutes;
                early_minutes += record.early_minutes;
            }
            DayStatus::Absent => absence_days += 1,
            DayStatus::Pending => pending_days += 1,
        }
    }

    MonthlyAttendance {
        worked_days,
        half_days,
        full_days: worked_days - half_days,
        absence_days,
        pending_days,
        late_minutes,
        early_minutes,
        overtime_hours,
        wage_changes,
    }
}
