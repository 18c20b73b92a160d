//! Orchestration of the attendance-to-payroll pipeline.
//!
//! [`PayrollEngine`] wires the boundary reads to the pure calculation
//! functions: it fans out the month's fetches, gathers every day's
//! schedule and override, classifies and aggregates the days, and runs
//! the requested salary formula. Batch runs isolate employees from one
//! another; one employee's failure never aborts the rest.

use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{info, warn};

use crate::calculation::{
    SalaryContext, aggregate_month, calculate_standard_salary, calculate_worked_days_salary,
    classify_day, collapse_day_punches,
};
use crate::config::SalaryParameters;
use crate::error::{EngineError, EngineResult};
use crate::models::{CalculationMethod, DayRecord, PayMonth, SalaryBreakdown};
use crate::store::PayrollStore;

/// The engine computing monthly salaries over a [`PayrollStore`].
///
/// Cheap to clone: the store is shared behind an `Arc` and the parameters
/// are a small value object fixed at construction.
#[derive(Clone)]
pub struct PayrollEngine {
    store: Arc<dyn PayrollStore>,
    parameters: SalaryParameters,
}

impl PayrollEngine {
    /// Creates an engine over a store with the given salary parameters.
    pub fn new(store: Arc<dyn PayrollStore>, parameters: SalaryParameters) -> Self {
        Self { store, parameters }
    }

    /// The salary parameters the engine was constructed with.
    pub fn parameters(&self) -> &SalaryParameters {
        &self.parameters
    }

    /// Computes one employee's monthly salary with the standard method.
    ///
    /// # Arguments
    ///
    /// * `employee_id` - The employee to calculate for
    /// * `month` - The calculation month (1-12)
    /// * `year` - The calculation year
    pub async fn compute_standard_salary(
        &self,
        employee_id: &str,
        month: u32,
        year: i32,
    ) -> EngineResult<SalaryBreakdown> {
        self.compute_salary(employee_id, month, year, CalculationMethod::Standard)
            .await
    }

    /// Computes one employee's monthly salary with the worked-days method.
    ///
    /// # Arguments
    ///
    /// * `employee_id` - The employee to calculate for
    /// * `month` - The calculation month (1-12)
    /// * `year` - The calculation year
    pub async fn compute_worked_days_salary(
        &self,
        employee_id: &str,
        month: u32,
        year: i32,
    ) -> EngineResult<SalaryBreakdown> {
        self.compute_salary(employee_id, month, year, CalculationMethod::WorkedDays)
            .await
    }

    /// Computes one employee's monthly salary with the given method.
    ///
    /// Issues the month-shaped boundary reads as one fan-out, then the
    /// per-day schedule and override reads, and only classifies days once
    /// every read has completed. Fails with `EmployeeNotFound` when the
    /// profile or compensation record is missing and `MonthNotValidated`
    /// when the month's attendance has not been approved.
    pub async fn compute_salary(
        &self,
        employee_id: &str,
        month: u32,
        year: i32,
        method: CalculationMethod,
    ) -> EngineResult<SalaryBreakdown> {
        let pay_month = PayMonth::new(year, month)?;
        info!(
            employee_id = %employee_id,
            month = month,
            year = year,
            method = %method,
            "Starting salary calculation"
        );

        let (profile, compensation, validation, punch_days, overtime_hours, wage_changes) =
            tokio::try_join!(
                self.store.fetch_profile(employee_id),
                self.store.fetch_compensation(employee_id),
                self.store.fetch_validation(employee_id, month, year),
                self.store.fetch_punch_times(employee_id, year, month),
                self.store.fetch_overtime_hours(employee_id, year, month),
                self.store.fetch_wage_adjustments(employee_id, year, month),
            )?;

        let profile = profile.ok_or_else(|| EngineError::EmployeeNotFound {
            employee_id: employee_id.to_string(),
        })?;
        let compensation = compensation.ok_or_else(|| EngineError::EmployeeNotFound {
            employee_id: employee_id.to_string(),
        })?;

        if !validation.is_validated {
            warn!(
                employee_id = %employee_id,
                month = month,
                year = year,
                "Attendance month not validated"
            );
            return Err(EngineError::MonthNotValidated {
                employee_id: employee_id.to_string(),
                month,
                year,
            });
        }

        // Gather every day's schedule and override before classifying any.
        let mut day_inputs = Vec::with_capacity(pay_month.day_count());
        for date in pay_month.days() {
            let (intervals, day_override) = tokio::try_join!(
                self.store.resolve_schedule(employee_id, date),
                self.store.fetch_override(employee_id, date),
            )?;
            day_inputs.push((date, intervals, day_override));
        }

        let day_records: Vec<DayRecord> = day_inputs
            .iter()
            .filter_map(|(date, intervals, day_override)| {
                let punches = collapse_day_punches(
                    punch_days.get(date).map(Vec::as_slice).unwrap_or(&[]),
                );
                classify_day(
                    *date,
                    intervals,
                    &punches,
                    day_override.as_ref(),
                    &self.parameters,
                )
            })
            .collect();

        let attendance = aggregate_month(&day_records, overtime_hours, wage_changes);

        let context = SalaryContext {
            profile: &profile,
            compensation: &compensation,
            attendance: &attendance,
            validation: &validation,
            month: pay_month,
            parameters: &self.parameters,
        };

        let breakdown = match method {
            CalculationMethod::Standard => calculate_standard_salary(&context)?,
            CalculationMethod::WorkedDays => calculate_worked_days_salary(&context)?,
        };

        info!(
            employee_id = %employee_id,
            month = month,
            year = year,
            worked_days = breakdown.worked_days,
            net_salary = %breakdown.net_salary,
            "Salary calculation completed"
        );
        Ok(breakdown)
    }

    /// Computes salaries for a batch of employees concurrently.
    ///
    /// Spawns one task per employee; results come back in input order,
    /// each employee paired with its own result. A failed employee
    /// occupies its slot with the error instead of aborting the batch.
    pub async fn compute_batch(
        &self,
        employee_ids: &[String],
        month: u32,
        year: i32,
        method: CalculationMethod,
    ) -> Vec<(String, EngineResult<SalaryBreakdown>)> {
        let mut tasks = JoinSet::new();
        for (index, employee_id) in employee_ids.iter().enumerate() {
            let engine = self.clone();
            let employee_id = employee_id.clone();
            tasks.spawn(async move {
                let result = engine
                    .compute_salary(&employee_id, month, year, method)
                    .await;
                (index, employee_id, result)
            });
        }

        let mut slots: Vec<Option<(String, EngineResult<SalaryBreakdown>)>> =
            employee_ids.iter().map(|_| None).collect();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, employee_id, result)) => slots[index] = Some((employee_id, result)),
                Err(join_error) => {
                    warn!(error = %join_error, "Batch calculation task failed to join");
                }
            }
        }

        slots
            .into_iter()
            .zip(employee_ids)
            .map(|(slot, employee_id)| {
                slot.unwrap_or_else(|| {
                    (
                        employee_id.clone(),
                        Err(EngineError::DataSourceUnavailable {
                            source_name: "batch".to_string(),
                            message: "calculation task aborted".to_string(),
                        }),
                    )
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        AttendanceOverride, Compensation, EmployeeProfile, PendingTreatment, ScheduleAssignment,
        ScheduleTemplate, WorkInterval,
    };
    use crate::store::InMemoryStore;
    use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
    use rust_decimal::Decimal;
    use std::collections::HashMap;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn ts(day: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 1, day)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn weekday_template() -> ScheduleTemplate {
        let mut days = HashMap::new();
        for weekday in 1u8..=5 {
            days.insert(
                weekday,
                vec![WorkInterval {
                    start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                    end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
                    break_minutes: 60,
                }],
            );
        }
        ScheduleTemplate {
            name: "standard".to_string(),
            days,
        }
    }

    fn seeded_store(employee_id: &str) -> InMemoryStore {
        InMemoryStore::new()
            .with_employee(
                EmployeeProfile {
                    id: employee_id.to_string(),
                    full_name: "Avery Collins".to_string(),
                    position: "Accountant".to_string(),
                    department: "Finance".to_string(),
                    join_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                },
                Compensation {
                    base_salary: dec("30000"),
                    hourly_rate: None,
                    overtime_rate: None,
                },
            )
            .with_template(weekday_template())
            .with_assignment(ScheduleAssignment {
                employee_id: employee_id.to_string(),
                template: "standard".to_string(),
                effective_from: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                effective_to: None,
            })
            .with_validated_month(employee_id, 1, 2026)
    }

    fn engine_over(store: InMemoryStore) -> PayrollEngine {
        PayrollEngine::new(Arc::new(store), SalaryParameters::default())
    }

    #[tokio::test]
    async fn test_single_attended_day_in_month() {
        // January 2026 has 22 weekdays; one attended, the rest absent.
        let store = seeded_store("emp_001")
            .with_punch("emp_001", ts(5, 8, 57))
            .with_punch("emp_001", ts(5, 17, 4));
        let engine = engine_over(store);

        let breakdown = engine
            .compute_standard_salary("emp_001", 1, 2026)
            .await
            .unwrap();

        assert_eq!(breakdown.worked_days, 1);
        assert_eq!(breakdown.absent_days, 21);
        assert_eq!(breakdown.absence_deduction, dec("28636.44"));
        assert_eq!(breakdown.net_salary, dec("1363.56"));
    }

    #[tokio::test]
    async fn test_lone_punch_day_is_pending_not_absent() {
        let store = seeded_store("emp_001")
            .with_punch("emp_001", ts(5, 8, 57))
            .with_punch("emp_001", ts(5, 17, 4))
            .with_punch("emp_001", ts(6, 7, 45));
        let engine = engine_over(store);

        let breakdown = engine
            .compute_standard_salary("emp_001", 1, 2026)
            .await
            .unwrap();

        assert_eq!(breakdown.worked_days, 1);
        assert_eq!(breakdown.pending_days, 1);
        assert_eq!(breakdown.absent_days, 20);
    }

    #[tokio::test]
    async fn test_override_credits_half_day() {
        let store = seeded_store("emp_001")
            .with_punch("emp_001", ts(5, 8, 57))
            .with_punch("emp_001", ts(5, 17, 4))
            .with_override(
                "emp_001",
                NaiveDate::from_ymd_opt(2026, 1, 6).unwrap(),
                AttendanceOverride {
                    override_type: "status_override".to_string(),
                    pending_treatment: PendingTreatment::HalfDay,
                },
            );
        let engine = engine_over(store);

        let breakdown = engine
            .compute_standard_salary("emp_001", 1, 2026)
            .await
            .unwrap();

        assert_eq!(breakdown.worked_days, 2);
        assert_eq!(breakdown.half_days, 1);
        assert_eq!(breakdown.absent_days, 20);
    }

    #[tokio::test]
    async fn test_missing_employee() {
        let engine = engine_over(seeded_store("emp_001"));
        let result = engine.compute_standard_salary("ghost", 1, 2026).await;
        assert!(matches!(
            result,
            Err(EngineError::EmployeeNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_unvalidated_month() {
        let engine = engine_over(seeded_store("emp_001"));
        let result = engine.compute_standard_salary("emp_001", 2, 2026).await;
        assert!(matches!(
            result,
            Err(EngineError::MonthNotValidated { month: 2, year: 2026, .. })
        ));
    }

    #[tokio::test]
    async fn test_invalid_month_rejected() {
        let engine = engine_over(seeded_store("emp_001"));
        let result = engine.compute_standard_salary("emp_001", 13, 2026).await;
        assert!(matches!(result, Err(EngineError::InvalidMonth { month: 13 })));
    }

    #[tokio::test]
    async fn test_batch_isolates_failures_and_keeps_order() {
        let store = seeded_store("emp_001")
            .with_punch("emp_001", ts(5, 8, 57))
            .with_punch("emp_001", ts(5, 17, 4));
        let engine = engine_over(store);

        let ids = vec!["emp_001".to_string(), "ghost".to_string()];
        let results = engine
            .compute_batch(&ids, 1, 2026, CalculationMethod::Standard)
            .await;

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].0, "emp_001");
        assert!(results[0].1.is_ok());
        assert_eq!(results[1].0, "ghost");
        assert!(matches!(
            results[1].1,
            Err(EngineError::EmployeeNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_worked_days_method_through_engine() {
        let store = seeded_store("emp_001")
            .with_punch("emp_001", ts(5, 8, 57))
            .with_punch("emp_001", ts(5, 17, 4))
            .with_punch("emp_001", ts(6, 9, 1))
            .with_punch("emp_001", ts(6, 17, 2));
        let engine = engine_over(store);

        let breakdown = engine
            .compute_worked_days_salary("emp_001", 1, 2026)
            .await
            .unwrap();

        assert_eq!(breakdown.worked_days, 2);
        assert_eq!(breakdown.worked_days_salary, Some(dec("2727.28")));
        assert_eq!(breakdown.absence_deduction, Decimal::ZERO);
        assert_eq!(breakdown.net_salary, dec("2727.28"));
    }

    #[tokio::test]
    async fn test_unavailable_store_surfaces_as_data_source_error() {
        let engine = engine_over(seeded_store("emp_001").with_unavailable());
        let result = engine.compute_standard_salary("emp_001", 1, 2026).await;
        assert!(matches!(
            result,
            Err(EngineError::DataSourceUnavailable { .. })
        ));
    }

    #[tokio::test]
    async fn test_zero_working_days_parameter_is_rejected() {
        // A validated month with a worked day forces rate derivation; the
        // zero divisor must come back as a typed error.
        let store = seeded_store("emp_001")
            .with_punch("emp_001", ts(5, 8, 57))
            .with_punch("emp_001", ts(5, 17, 4));
        let parameters = SalaryParameters {
            working_days_per_month: 0,
            ..SalaryParameters::default()
        };
        let engine = PayrollEngine::new(Arc::new(store), parameters);

        let result = engine.compute_standard_salary("emp_001", 1, 2026).await;
        assert!(matches!(
            result,
            Err(EngineError::InvalidParameters { .. })
        ));
    }

    #[tokio::test]
    async fn test_batch_reports_parameter_error_in_slot() {
        let store = seeded_store("emp_001")
            .with_punch("emp_001", ts(5, 8, 57))
            .with_punch("emp_001", ts(5, 17, 4));
        let parameters = SalaryParameters {
            working_days_per_month: 0,
            ..SalaryParameters::default()
        };
        let engine = PayrollEngine::new(Arc::new(store), parameters);

        let ids = vec!["emp_001".to_string(), "ghost".to_string()];
        let results = engine
            .compute_batch(&ids, 1, 2026, CalculationMethod::Standard)
            .await;

        // The parameter error lands in the employee's own slot; other
        // failures keep their own variants.
        assert!(matches!(
            results[0].1,
            Err(EngineError::InvalidParameters { .. })
        ));
        assert!(matches!(
            results[1].1,
            Err(EngineError::EmployeeNotFound { .. })
        ));
    }
}
