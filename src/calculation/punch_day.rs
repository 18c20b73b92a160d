//! Collapsing raw punch timestamps into a daily entry/exit pair.
//!
//! Time clocks produce anywhere from zero to a dozen punches per day:
//! missed badges, double-taps, lunchtime in-and-outs. This module reduces
//! one day's worth of punches to the [`DayPunches`] shape the daily
//! classifier consumes.

use chrono::{NaiveDateTime, Timelike};

use crate::models::DayPunches;

/// Hour-of-day boundary for interpreting a lone punch. A single punch
/// before this hour is taken as an arrival; at or after it, a departure.
const LONE_PUNCH_NOON_HOUR: u32 = 12;

/// Collapses one day's punch timestamps into an entry/exit pair.
///
/// - No punches: both times are `None`.
/// - One punch: its time-of-day decides which side it lands on. Before
///   noon it is an entry (the employee forgot to punch out); from noon on
///   it is an exit (the employee forgot to punch in). The other side stays
///   `None` and is never fabricated.
/// - Two or more punches: entry is the earliest time-of-day, exit the
///   latest. Punches in between are ignored for the span but still counted
///   in `punch_count`.
///
/// The input order does not matter.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::collapse_day_punches;
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
/// let punches = vec![
///     day.and_hms_opt(12, 2, 0).unwrap(),
///     day.and_hms_opt(8, 57, 0).unwrap(),
///     day.and_hms_opt(17, 4, 0).unwrap(),
/// ];
///
/// let collapsed = collapse_day_punches(&punches);
/// assert_eq!(collapsed.entry_time, day.and_hms_opt(8, 57, 0).map(|t| t.time()));
/// assert_eq!(collapsed.exit_time, day.and_hms_opt(17, 4, 0).map(|t| t.time()));
/// assert_eq!(collapsed.punch_count, 3);
/// ```
pub fn collapse_day_punches(punches: &[NaiveDateTime]) -> DayPunches {
    match punches {
        [] => DayPunches::empty(),
        [only] => {
            let time = only.time();
            if time.hour() < LONE_PUNCH_NOON_HOUR {
                DayPunches {
                    entry_time: Some(time),
                    exit_time: None,
                    punch_count: 1,
                }
            } else {
                DayPunches {
                    entry_time: None,
                    exit_time: Some(time),
                    punch_count: 1,
                }
            }
        }
        many => {
            let entry_time = many.iter().map(|p| p.time()).min();
            let exit_time = many.iter().map(|p| p.time()).max();
            DayPunches {
                entry_time,
                exit_time,
                punch_count: many.len(),
            }
        }
    }
}
