//! Work schedule models.
//!
//! This module defines the [`WorkInterval`], [`ScheduleTemplate`] and
//! [`ScheduleAssignment`] structs used to describe when an employee is
//! expected to be at work. A template is a named weekly pattern; an
//! assignment binds an employee to a template for a date range.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A single scheduled work interval within a day.
///
/// # Example
///
/// ```
/// use payroll_engine::models::WorkInterval;
/// use chrono::NaiveTime;
///
/// let interval = WorkInterval {
///     start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     break_minutes: 60,
/// };
/// assert_eq!(interval.break_minutes, 60);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkInterval {
    /// The scheduled start of the interval.
    pub start_time: NaiveTime,
    /// The scheduled end of the interval.
    pub end_time: NaiveTime,
    /// Unpaid break minutes inside the interval.
    pub break_minutes: i64,
}

/// A named weekly pattern of work intervals.
///
/// Days are keyed by weekday number. Keys follow ISO numbering
/// (Monday = 1 through Sunday = 7), except that the week-final day may be
/// keyed `0` or `7` interchangeably; the resolver treats the two as the
/// same slot. A weekday with no entry is simply not scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleTemplate {
    /// The template's unique name (e.g., "head_office_standard").
    pub name: String,
    /// Map of weekday key to the intervals scheduled on that weekday.
    pub days: HashMap<u8, Vec<WorkInterval>>,
}

impl ScheduleTemplate {
    /// Looks up the intervals scheduled for an ISO weekday (Monday = 1
    /// through Sunday = 7). Weekday 7 also matches a `0` key, the other
    /// accepted spelling of the week-final day.
    pub fn intervals_for(&self, weekday: u8) -> Option<&[WorkInterval]> {
        if let Some(intervals) = self.days.get(&weekday) {
            return Some(intervals.as_slice());
        }
        if weekday == 7 {
            return self.days.get(&0).map(Vec::as_slice);
        }
        None
    }
}

/// Binds an employee to a schedule template for a date range.
///
/// `effective_to` of `None` means the assignment is open-ended. When two
/// assignments' ranges overlap on a date, the one with the latest
/// `effective_from` wins (most recently effective assignment).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleAssignment {
    /// The employee this assignment applies to.
    pub employee_id: String,
    /// The name of the assigned [`ScheduleTemplate`].
    pub template: String,
    /// First date (inclusive) the assignment is active.
    pub effective_from: NaiveDate,
    /// Last date (inclusive) the assignment is active; `None` = open-ended.
    #[serde(default)]
    pub effective_to: Option<NaiveDate>,
}

impl ScheduleAssignment {
    /// Returns true if the assignment's date range contains `date`.
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        if date < self.effective_from {
            return false;
        }
        match self.effective_to {
            Some(end) => date <= end,
            None => true,
        }
    }
}
