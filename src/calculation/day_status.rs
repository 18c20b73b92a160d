//! Daily attendance status classification.
//!
//! This module contains the single decision point that turns one day's
//! schedule, collapsed punches, and optional administrative override into
//! a [`DayRecord`]. The rules are strictly prioritized; the function is
//! pure and running it twice over the same inputs yields the same record.

use chrono::NaiveDate;

use crate::config::SalaryParameters;
use crate::models::{
    AttendanceOverride, DayPunches, DayRecord, DayStatus, PendingTreatment, WorkInterval,
};

/// Classifies one scheduled day of attendance.
///
/// Rules, in priority order:
///
/// 1. Override `full_day`: Present, no late or early minutes.
/// 2. Override `half_day`: Present as a half-day, no late or early minutes.
/// 3. Override `refuse`: Absent.
/// 4. No override and exactly one punch: Pending. The day counts toward
///    neither worked nor absent days until someone resolves it.
/// 5. Any other override: Present, no late or early minutes.
/// 6. Two or more punches: Present, with lateness measured against the
///    first interval's start and early departure against the last
///    interval's end, each reduced by its grace period and clamped at
///    zero. A missing entry or exit side never produces minutes.
/// 7. Otherwise (no punches, no override): Absent.
///
/// Returns `None` when `intervals` is empty: an unscheduled day has no
/// attendance status at all and is excluded from every later count.
///
/// # Arguments
///
/// * `date` - The calendar date being classified
/// * `intervals` - The day's resolved schedule, ordered by start time
/// * `punches` - The day's collapsed punch pair
/// * `day_override` - The administrative override for the day, if any
/// * `parameters` - Salary parameters supplying the grace periods
pub fn classify_day(
    date: NaiveDate,
    intervals: &[WorkInterval],
    punches: &DayPunches,
    day_override: Option<&AttendanceOverride>,
    parameters: &SalaryParameters,
) -> Option<DayRecord> {
    if intervals.is_empty() {
        return None;
    }

    let record = match day_override {
        Some(decision) => match decision.pending_treatment {
            PendingTreatment::FullDay | PendingTreatment::None => DayRecord {
                date,
                status: DayStatus::Present,
                half_day: false,
                late_minutes: 0,
                early_minutes: 0,
            },
            PendingTreatment::HalfDay => DayRecord {
                date,
                status: DayStatus::Present,
                half_day: true,
                late_minutes: 0,
                early_minutes: 0,
            },
            PendingTreatment::Refuse => DayRecord {
                date,
                status: DayStatus::Absent,
                half_day: false,
                late_minutes: 0,
                early_minutes: 0,
            },
        },
        None if punches.punch_count == 1 => DayRecord {
            date,
            status: DayStatus::Pending,
            half_day: false,
            late_minutes: 0,
            early_minutes: 0,
        },
        None if punches.punch_count >= 2 => {
            let (late_minutes, early_minutes) = punch_minutes(intervals, punches, parameters);
            DayRecord {
                date,
                status: DayStatus::Present,
                half_day: false,
                late_minutes,
                early_minutes,
            }
        }
        None => DayRecord {
            date,
            status: DayStatus::Absent,
            half_day: false,
            late_minutes: 0,
            early_minutes: 0,
        },
    };

    Some(record)
}

/// Measures grace-adjusted lateness and early departure for a day with a
/// full punch pair. Each side is measured only when its punch exists.
fn punch_minutes(
    intervals: &[WorkInterval],
    punches: &DayPunches,
    parameters: &SalaryParameters,
) -> (i64, i64) {
    let (Some(first), Some(last)) = (intervals.first(), intervals.last()) else {
        return (0, 0);
    };

    let late_minutes = punches
        .entry_time
        .map(|entry| {
            let raw = (entry - first.start_time).num_minutes();
            (raw - parameters.lateness_grace_minutes).max(0)
        })
        .unwrap_or(0);

    let early_minutes = punches
        .exit_time
        .map(|exit| {
            let raw = (last.end_time - exit).num_minutes();
            (raw - parameters.early_departure_grace_minutes).max(0)
        })
        .unwrap_or(0);

    (late_minutes, early_minutes)
}
