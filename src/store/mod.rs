//! Data access boundary for the payroll engine.
//!
//! Master data (profiles, compensation, schedules) and monthly facts
//! (punches, overrides, overtime, adjustments, validation) are owned by
//! other systems. The engine reaches them only through the
//! [`PayrollStore`] trait, so the calculation pipeline stays independent
//! of where the records actually live. [`InMemoryStore`] is the
//! in-process implementation used by tests, benchmarks, and the demo API
//! state.

mod memory;

pub use memory::InMemoryStore;

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{
    AttendanceOverride, Compensation, EmployeeProfile, ValidationRecord, WorkInterval,
};

/// Read access to everything a salary run needs.
///
/// All methods are read-only. Failures of the backing system surface as
/// `DataSourceUnavailable`; a missing record is not a failure and comes
/// back as `None`, an empty collection, or zero, whichever fits the
/// method.
#[async_trait]
pub trait PayrollStore: Send + Sync {
    /// Resolves the work intervals the employee was scheduled for on one
    /// date. An empty vector means the day is not scheduled.
    async fn resolve_schedule(
        &self,
        employee_id: &str,
        date: NaiveDate,
    ) -> EngineResult<Vec<WorkInterval>>;

    /// Fetches the month's punch timestamps, grouped by calendar day.
    /// Punches are already attributed to the employee at import time.
    async fn fetch_punch_times(
        &self,
        employee_id: &str,
        year: i32,
        month: u32,
    ) -> EngineResult<HashMap<NaiveDate, Vec<NaiveDateTime>>>;

    /// Fetches the administrative override for one date, if any.
    async fn fetch_override(
        &self,
        employee_id: &str,
        date: NaiveDate,
    ) -> EngineResult<Option<AttendanceOverride>>;

    /// Fetches the approved overtime hour total for the month.
    async fn fetch_overtime_hours(
        &self,
        employee_id: &str,
        year: i32,
        month: u32,
    ) -> EngineResult<Decimal>;

    /// Fetches the signed wage adjustment total for the month.
    async fn fetch_wage_adjustments(
        &self,
        employee_id: &str,
        year: i32,
        month: u32,
    ) -> EngineResult<Decimal>;

    /// Fetches the employee's compensation record.
    async fn fetch_compensation(&self, employee_id: &str) -> EngineResult<Option<Compensation>>;

    /// Fetches the month's attendance validation state. Months nobody has
    /// reviewed come back as a default, not-validated record.
    async fn fetch_validation(
        &self,
        employee_id: &str,
        month: u32,
        year: i32,
    ) -> EngineResult<ValidationRecord>;

    /// Fetches the employee's identity profile.
    async fn fetch_profile(&self, employee_id: &str) -> EngineResult<Option<EmployeeProfile>>;
}
