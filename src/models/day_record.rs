//! Daily attendance status models and administrative overrides.
//!
//! This module defines the [`DayStatus`] enum produced by the daily
//! classifier, the [`DayRecord`] that carries one day's classification,
//! and the [`AttendanceOverride`] an administrator can place on a day to
//! supersede whatever the punches say.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The canonical attendance status of one scheduled day.
///
/// Days without any scheduled intervals never receive a status; they are
/// excluded from classification entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    /// The employee attended (possibly as a half-day).
    Present,
    /// The employee did not attend a scheduled day.
    Absent,
    /// A lone punch left the day unresolved; it awaits an administrative
    /// decision and counts toward neither worked nor absent days.
    Pending,
}

/// One classified day of attendance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    /// The calendar date of the day.
    pub date: NaiveDate,
    /// The derived status for the day.
    pub status: DayStatus,
    /// True when the day is credited as a half-day (Present only).
    pub half_day: bool,
    /// Minutes of lateness beyond the grace period (zero unless the day
    /// was classified from punch evidence).
    pub late_minutes: i64,
    /// Minutes of early departure beyond the grace period (zero unless the
    /// day was classified from punch evidence).
    pub early_minutes: i64,
}

/// How an administrator resolved a pending or disputed day.
///
/// This is the closed form of the free-form `pending_treatment` field in
/// legacy override payloads; it is decoded once at the boundary so the
/// classifier can run a total match over a finite enum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PendingTreatment {
    /// No explicit treatment; the override still marks the day Present.
    #[default]
    None,
    /// Credit the day as a full Present day.
    FullDay,
    /// Credit the day as a Present half-day.
    HalfDay,
    /// Refuse the day; it counts as Absent.
    Refuse,
}

/// An administrative decision that supersedes the punch-derived status
/// for one (employee, date). At most one override exists per day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceOverride {
    /// The kind of override (e.g., "status_override").
    pub override_type: String,
    /// How the day should be treated.
    #[serde(default)]
    pub pending_treatment: PendingTreatment,
}

impl AttendanceOverride {
    /// Decodes an override from a legacy free-form `details` payload.
    ///
    /// The historical records store `pending_treatment` as a string nested
    /// inside a JSON details object. Anything other than the three known
    /// values (including a missing field) maps to
    /// [`PendingTreatment::None`], which still marks the day Present.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::{AttendanceOverride, PendingTreatment};
    /// use serde_json::json;
    ///
    /// let details = json!({ "pending_treatment": "half_day", "note": "late note" });
    /// let decoded = AttendanceOverride::from_details("status_override", &details);
    /// assert_eq!(decoded.pending_treatment, PendingTreatment::HalfDay);
    /// ```
    pub fn from_details(override_type: &str, details: &serde_json::Value) -> Self {
        let pending_treatment = match details.get("pending_treatment").and_then(|v| v.as_str()) {
            Some("full_day") => PendingTreatment::FullDay,
            Some("half_day") => PendingTreatment::HalfDay,
            Some("refuse") => PendingTreatment::Refuse,
            _ => PendingTreatment::None,
        };

        Self {
            override_type: override_type.to_string(),
            pending_treatment,
        }
    }
}
