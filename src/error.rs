//! Error types for the payroll calculation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during attendance derivation
//! and salary calculation.

use thiserror::Error;

/// The main error type for the payroll calculation engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application. A missing
/// employee record and an unvalidated month are distinct variants so
/// these expected precondition failures never surface as a generic
/// failure.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::EmployeeNotFound {
///     employee_id: "emp_042".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee not found: emp_042");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// No compensation or identity record could be resolved for the employee.
    #[error("Employee not found: {employee_id}")]
    EmployeeNotFound {
        /// The employee id that could not be resolved.
        employee_id: String,
    },

    /// The month's attendance has not been certified by the validation workflow.
    ///
    /// The caller should validate the month first, then retry the calculation.
    #[error(
        "Attendance for employee '{employee_id}' in {month}/{year} is not validated; \
         please validate the month before calculating salary"
    )]
    MonthNotValidated {
        /// The employee whose month is unvalidated.
        employee_id: String,
        /// The calendar month (1-12).
        month: u32,
        /// The calendar year.
        year: i32,
    },

    /// A boundary data source failed transiently.
    ///
    /// The engine performs no writes, so a retry with backoff is always safe.
    #[error("Data source '{source_name}' unavailable: {message}")]
    DataSourceUnavailable {
        /// The name of the data source that failed (e.g., "punches", "schedule").
        source_name: String,
        /// A description of the failure.
        message: String,
    },

    /// The requested month is outside the calendar range 1-12.
    #[error("Invalid month: {month} (expected 1-12)")]
    InvalidMonth {
        /// The rejected month value.
        month: u32,
    },

    /// The salary parameters are unusable by the formulas.
    ///
    /// Raised before any rate is derived, so a zero or out-of-range
    /// divisor never reaches the arithmetic.
    #[error("Invalid salary parameters: {message}")]
    InvalidParameters {
        /// A description of the rejected value.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or failed validation.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse or validation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
