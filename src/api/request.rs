//! Request types for the payroll engine API.
//!
//! This module defines the JSON request structures for the salary
//! calculation endpoints.

use serde::{Deserialize, Serialize};

use crate::models::CalculationMethod;

/// Request body for the `/salary/standard` and `/salary/worked-days`
/// endpoints.
///
/// # Example
///
/// ```
/// use payroll_engine::api::SalaryRequest;
///
/// let request: SalaryRequest = serde_json::from_str(
///     r#"{ "employee_id": "emp_001", "month": 1, "year": 2026 }"#,
/// ).unwrap();
/// assert_eq!(request.month, 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryRequest {
    /// The employee to calculate for.
    pub employee_id: String,
    /// The calculation month (1-12).
    pub month: u32,
    /// The calculation year.
    pub year: i32,
}

/// Request body for the `/salary/batch` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSalaryRequest {
    /// The employees to calculate for, in response order.
    pub employee_ids: Vec<String>,
    /// The calculation month (1-12).
    pub month: u32,
    /// The calculation year.
    pub year: i32,
    /// The salary formula to run for every employee.
    pub method: CalculationMethod,
}
