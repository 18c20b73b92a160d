//! Employee identity and compensation models.
//!
//! This module defines the [`EmployeeProfile`] and [`Compensation`] structs
//! that the engine reads from the master-data collaborator. Both are
//! read-only inputs; the engine never mutates employee records.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identity information for an employee, passed through into salary results.
///
/// Employee master data is owned by an external collaborator; the engine
/// only needs the fields that appear on a salary breakdown plus the join
/// date, which bounds the earliest payroll period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's full display name.
    pub full_name: String,
    /// The employee's position title.
    pub position: String,
    /// The department the employee belongs to.
    pub department: String,
    /// The date the employee joined; days before this have no schedule.
    pub join_date: NaiveDate,
}

/// Compensation parameters for an employee.
///
/// Explicit nonzero `hourly_rate` and `overtime_rate` values take precedence
/// over rates derived from `base_salary`; see
/// [`derive_rates`](crate::calculation::derive_rates) for the fallback chain.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Compensation;
/// use rust_decimal::Decimal;
///
/// let compensation = Compensation {
///     base_salary: Decimal::new(30000, 0),
///     hourly_rate: None,
///     overtime_rate: None,
/// };
/// assert!(compensation.hourly_rate.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compensation {
    /// The monthly base salary.
    pub base_salary: Decimal,
    /// Optional explicit hourly rate; `None` or zero means "derive it".
    #[serde(default)]
    pub hourly_rate: Option<Decimal>,
    /// Optional explicit overtime rate; `None` or zero means "derive it".
    #[serde(default)]
    pub overtime_rate: Option<Decimal>,
}
