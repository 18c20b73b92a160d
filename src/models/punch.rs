//! Raw punch and collapsed day-punch models.
//!
//! A raw punch is one timestamped clock event from a time-recording device
//! or imported file. Punches are immutable once recorded and carry an
//! employee-name string rather than an id; the import-time reconciliation
//! step (see [`crate::import`]) attaches them to employee ids exactly once.

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// One raw time-clock punch row as it arrives from an import file.
///
/// The `employee_name` field is whatever the device or export wrote,
/// usually some concatenation of first and last name. It is only
/// interpreted by the reconciliation step, never during calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPunchRow {
    /// The employee name string recorded by the device.
    pub employee_name: String,
    /// The punch timestamp.
    pub timestamp: NaiveDateTime,
}

/// The collapsed view of one employee's punches for one calendar day.
///
/// Produced by [`collapse_day_punches`](crate::calculation::collapse_day_punches).
/// A lone punch yields either an entry or an exit depending on its
/// hour-of-day; two or more punches yield the earliest as entry and the
/// latest as exit, with intermediate punches ignored for the span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPunches {
    /// The observed entry time, if one could be determined.
    pub entry_time: Option<NaiveTime>,
    /// The observed exit time, if one could be determined.
    pub exit_time: Option<NaiveTime>,
    /// How many raw punches were recorded on the day.
    pub punch_count: usize,
}

impl DayPunches {
    /// A day with no punches at all.
    pub fn empty() -> Self {
        Self {
            entry_time: None,
            exit_time: None,
            punch_count: 0,
        }
    }
}
