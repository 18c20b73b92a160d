//! In-process implementation of the payroll data store.
//!
//! Backs the integration tests, benchmarks, and the demo API state. The
//! store is assembled up front with builder-style `with_*` methods and
//! then shared read-only behind an `Arc`, so no interior locking is
//! needed.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use super::PayrollStore;
use crate::calculation::resolve_intervals;
use crate::error::{EngineError, EngineResult};
use crate::import::PunchReconciliation;
use crate::models::{
    AttendanceOverride, Compensation, EmployeeProfile, ScheduleAssignment, ScheduleTemplate,
    ValidationRecord, WorkInterval,
};

/// An in-memory [`PayrollStore`] seeded through builder methods.
///
/// # Example
///
/// ```
/// use payroll_engine::store::InMemoryStore;
/// use payroll_engine::models::{Compensation, EmployeeProfile};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let store = InMemoryStore::new()
///     .with_employee(
///         EmployeeProfile {
///             id: "emp_001".to_string(),
///             full_name: "Avery Collins".to_string(),
///             position: "Accountant".to_string(),
///             department: "Finance".to_string(),
///             join_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
///         },
///         Compensation {
///             base_salary: Decimal::from(30000),
///             hourly_rate: None,
///             overtime_rate: None,
///         },
///     )
///     .with_validated_month("emp_001", 1, 2026);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    profiles: HashMap<String, EmployeeProfile>,
    compensation: HashMap<String, Compensation>,
    templates: HashMap<String, ScheduleTemplate>,
    assignments: HashMap<String, Vec<ScheduleAssignment>>,
    punches: HashMap<String, HashMap<NaiveDate, Vec<NaiveDateTime>>>,
    overrides: HashMap<(String, NaiveDate), AttendanceOverride>,
    overtime: HashMap<(String, i32, u32), Decimal>,
    adjustments: HashMap<(String, i32, u32), Decimal>,
    validations: HashMap<(String, u32, i32), ValidationRecord>,
    unavailable: bool,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an employee's profile and compensation record.
    pub fn with_employee(mut self, profile: EmployeeProfile, compensation: Compensation) -> Self {
        self.compensation.insert(profile.id.clone(), compensation);
        self.profiles.insert(profile.id.clone(), profile);
        self
    }

    /// Registers a schedule template under its name.
    pub fn with_template(mut self, template: ScheduleTemplate) -> Self {
        self.templates.insert(template.name.clone(), template);
        self
    }

    /// Appends a schedule assignment for its employee.
    pub fn with_assignment(mut self, assignment: ScheduleAssignment) -> Self {
        self.assignments
            .entry(assignment.employee_id.clone())
            .or_default()
            .push(assignment);
        self
    }

    /// Records one punch timestamp for an employee. The calendar day is
    /// taken from the timestamp.
    pub fn with_punch(mut self, employee_id: &str, timestamp: NaiveDateTime) -> Self {
        self.punches
            .entry(employee_id.to_string())
            .or_default()
            .entry(timestamp.date())
            .or_default()
            .push(timestamp);
        self
    }

    /// Places an administrative override on one date.
    pub fn with_override(
        mut self,
        employee_id: &str,
        date: NaiveDate,
        decision: AttendanceOverride,
    ) -> Self {
        self.overrides.insert((employee_id.to_string(), date), decision);
        self
    }

    /// Sets the approved overtime hour total for a month.
    pub fn with_overtime(
        mut self,
        employee_id: &str,
        year: i32,
        month: u32,
        hours: Decimal,
    ) -> Self {
        self.overtime
            .insert((employee_id.to_string(), year, month), hours);
        self
    }

    /// Sets the signed wage adjustment total for a month.
    pub fn with_wage_adjustment(
        mut self,
        employee_id: &str,
        year: i32,
        month: u32,
        amount: Decimal,
    ) -> Self {
        self.adjustments
            .insert((employee_id.to_string(), year, month), amount);
        self
    }

    /// Stores a validation record for a month.
    pub fn with_validation(
        mut self,
        employee_id: &str,
        month: u32,
        year: i32,
        record: ValidationRecord,
    ) -> Self {
        self.validations
            .insert((employee_id.to_string(), month, year), record);
        self
    }

    /// Marks a month as validated with no reviewer metadata.
    pub fn with_validated_month(self, employee_id: &str, month: u32, year: i32) -> Self {
        self.with_validation(employee_id, month, year, ValidationRecord::validated())
    }

    /// Folds an import reconciliation's matched punches into the store.
    /// Unmatched rows stay with the caller for manual review.
    pub fn ingest_reconciled_punches(mut self, reconciliation: &PunchReconciliation) -> Self {
        for (employee_id, timestamps) in &reconciliation.matched {
            for timestamp in timestamps {
                self = self.with_punch(employee_id, *timestamp);
            }
        }
        self
    }

    /// Makes every method fail with `DataSourceUnavailable`, simulating a
    /// backing system outage.
    pub fn with_unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }

    fn check_available(&self) -> EngineResult<()> {
        if self.unavailable {
            return Err(EngineError::DataSourceUnavailable {
                source_name: "in_memory".to_string(),
                message: "store marked unavailable".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl PayrollStore for InMemoryStore {
    async fn resolve_schedule(
        &self,
        employee_id: &str,
        date: NaiveDate,
    ) -> EngineResult<Vec<WorkInterval>> {
        self.check_available()?;
        let assignments = match self.assignments.get(employee_id) {
            Some(assignments) => assignments.as_slice(),
            None => return Ok(Vec::new()),
        };
        Ok(resolve_intervals(assignments, &self.templates, date))
    }

    async fn fetch_punch_times(
        &self,
        employee_id: &str,
        year: i32,
        month: u32,
    ) -> EngineResult<HashMap<NaiveDate, Vec<NaiveDateTime>>> {
        self.check_available()?;
        let month_days = self
            .punches
            .get(employee_id)
            .map(|days| {
                days.iter()
                    .filter(|(date, _)| date.year() == year && date.month() == month)
                    .map(|(date, times)| (*date, times.clone()))
                    .collect()
            })
            .unwrap_or_default();
        Ok(month_days)
    }

    async fn fetch_override(
        &self,
        employee_id: &str,
        date: NaiveDate,
    ) -> EngineResult<Option<AttendanceOverride>> {
        self.check_available()?;
        Ok(self
            .overrides
            .get(&(employee_id.to_string(), date))
            .cloned())
    }

    async fn fetch_overtime_hours(
        &self,
        employee_id: &str,
        year: i32,
        month: u32,
    ) -> EngineResult<Decimal> {
        self.check_available()?;
        Ok(self
            .overtime
            .get(&(employee_id.to_string(), year, month))
            .copied()
            .unwrap_or(Decimal::ZERO))
    }

    async fn fetch_wage_adjustments(
        &self,
        employee_id: &str,
        year: i32,
        month: u32,
    ) -> EngineResult<Decimal> {
        self.check_available()?;
        Ok(self
            .adjustments
            .get(&(employee_id.to_string(), year, month))
            .copied()
            .unwrap_or(Decimal::ZERO))
    }

    async fn fetch_compensation(&self, employee_id: &str) -> EngineResult<Option<Compensation>> {
        self.check_available()?;
        Ok(self.compensation.get(employee_id).cloned())
    }

    async fn fetch_validation(
        &self,
        employee_id: &str,
        month: u32,
        year: i32,
    ) -> EngineResult<ValidationRecord> {
        self.check_available()?;
        Ok(self
            .validations
            .get(&(employee_id.to_string(), month, year))
            .cloned()
            .unwrap_or_default())
    }

    async fn fetch_profile(&self, employee_id: &str) -> EngineResult<Option<EmployeeProfile>> {
        self.check_available()?;
        Ok(self.profiles.get(employee_id).cloned())
    }
}
